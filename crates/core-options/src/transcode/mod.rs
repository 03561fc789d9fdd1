//! Schema → host payload transcoding, one adapter per protocol generation.

mod scan;
mod v0;
mod v1;
mod v2;

pub use scan::{scan_values, ValueScan};
pub use v0::{pack_option, packed_len, transcode_v0, V0Payload, Variable, DELIMITER, SEPARATOR};
pub use v1::{flatten, transcode_v1, FlatOption, V1Payload};
pub use v2::{transcode_v2, V2Payload};

use serde::Serialize;

use crate::error::{RegistrationError, TranscodeError};
use crate::host::Host;
use crate::lifecycle::BufferLedger;
use crate::locale::Resolved;
use crate::probe::ProtocolGeneration;

/// Host-format payload for exactly one protocol generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "generation", rename_all = "lowercase")]
pub enum Payload<'a> {
    V2(V2Payload<'a>),
    V1(V1Payload<'a>),
    V0(V0Payload<'a>),
}

impl<'a> Payload<'a> {
    pub fn generation(&self) -> ProtocolGeneration {
        match self {
            Self::V2(_) => ProtocolGeneration::V2,
            Self::V1(_) => ProtocolGeneration::V1,
            Self::V0(_) => ProtocolGeneration::V0,
        }
    }

    /// Options the host will see from the base schema.
    pub fn option_count(&self) -> usize {
        match self {
            Self::V2(payload) => payload.base.len(),
            Self::V1(payload) => payload.option_count(),
            Self::V0(payload) => payload.option_count(),
        }
    }

    /// Hands the payload to the matching host call. Returns the host's
    /// "categories supported" answer, which only V2 can report.
    pub fn register<H: Host + ?Sized>(self, host: &mut H) -> Result<bool, RegistrationError> {
        match self {
            Self::V2(payload) => host.register_options_v2(&payload),
            Self::V1(payload) => host.register_options_v1(&payload).map(|()| false),
            Self::V0(payload) => host.register_legacy_variables(payload).map(|()| false),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Builds the payload for `generation`. V0 ignores any overlay.
pub fn transcode<'a>(
    resolved: Resolved<'a>,
    generation: ProtocolGeneration,
    ledger: &mut BufferLedger<'_>,
) -> Result<Payload<'a>, TranscodeError> {
    match generation {
        ProtocolGeneration::V2 => Ok(Payload::V2(transcode_v2(&resolved))),
        ProtocolGeneration::V1 => transcode_v1(&resolved, ledger).map(Payload::V1),
        ProtocolGeneration::V0 => transcode_v0(resolved.base, ledger).map(Payload::V0),
    }
}
