//! Host protocol generation detection.

use serde::Serialize;
use tracing::debug;

use crate::host::Host;

/// Option registration protocol understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolGeneration {
    /// One packed string per option, no labels, no localization.
    V0 = 0,
    /// Flat options with labels and a locale overlay, no categories.
    V1 = 1,
    /// Categories, subtitles and a locale overlay.
    V2 = 2,
}

impl ProtocolGeneration {
    /// Maps the host's reported version; anything newer than 2 speaks V2.
    pub fn from_host_version(version: u32) -> Self {
        match version {
            0 => Self::V0,
            1 => Self::V1,
            _ => Self::V2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::V0 => "v0",
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    /// Whether this generation carries a locale overlay.
    pub fn supports_locale(self) -> bool {
        !matches!(self, Self::V0)
    }
}

impl std::fmt::Display for ProtocolGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asks the host once for its protocol version.
///
/// A host that cannot answer is treated as the oldest generation.
pub fn probe<H: Host + ?Sized>(host: &mut H) -> ProtocolGeneration {
    match host.query_protocol_version() {
        Some(version) => {
            let generation = ProtocolGeneration::from_host_version(version);
            debug!(version, %generation, "host reported option protocol version");
            generation
        }
        None => {
            debug!("host did not report an option protocol version; using v0");
            ProtocolGeneration::V0
        }
    }
}
