//! Frame-rate selection.

use core_options::OptionValues;
use tracing::debug;

pub const FPS_MODE_OPTION: &str = "mesen_fps_mode";
pub const REGION_OPTION: &str = "mesen_region";

const MESEN_NTSC: f64 = 60.098_811_862_348_404;
const MESEN_PAL: f64 = 50.006_977_968_268_29;
const FCEUMM_NTSC: f64 = 1_008_307_711.0 / 16_777_215.0;
const FCEUMM_PAL: f64 = 838_977_920.0 / 16_777_215.0;
const INTEGER_NTSC: f64 = 60.0;
const INTEGER_PAL: f64 = 50.0;

/// Emulated console timing family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleModel {
    #[default]
    Ntsc,
    Pal,
    Dendy,
}

impl ConsoleModel {
    /// Model forced by the region option; `None` for `"Auto"` or anything
    /// unrecognized.
    pub fn from_region_option(value: &str) -> Option<Self> {
        match value {
            "NTSC" => Some(Self::Ntsc),
            "PAL" => Some(Self::Pal),
            "Dendy" => Some(Self::Dendy),
            _ => None,
        }
    }

    pub fn from_values(values: &OptionValues) -> Option<Self> {
        values.get(REGION_OPTION).and_then(Self::from_region_option)
    }

    fn is_ntsc(self) -> bool {
        self == Self::Ntsc
    }
}

/// How the core reports its frame rate to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FpsMode {
    /// Rates measured from real hardware.
    #[default]
    Mesen,
    /// Rates matching the FCEUmm core.
    Fceumm,
    /// Exactly 60 or 50 frames per second.
    Integer,
}

impl FpsMode {
    pub fn from_option_value(value: &str) -> Option<Self> {
        match value {
            "fps_mesen" => Some(Self::Mesen),
            "fps_fceumm" => Some(Self::Fceumm),
            "fps_integer" => Some(Self::Integer),
            _ => None,
        }
    }

    pub fn as_option_value(self) -> &'static str {
        match self {
            Self::Mesen => "fps_mesen",
            Self::Fceumm => "fps_fceumm",
            Self::Integer => "fps_integer",
        }
    }

    /// Mode selected in `values`, [`FpsMode::Mesen`] when unset.
    pub fn from_values(values: &OptionValues) -> Self {
        match values.get(FPS_MODE_OPTION) {
            Some(value) => Self::from_option_value(value).unwrap_or_else(|| {
                debug!(value, "unknown fps mode; using mesen rates");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Frames per second reported for `model`. Dendy runs at PAL rates.
    pub fn frame_rate(self, model: ConsoleModel) -> f64 {
        let ntsc = model.is_ntsc();
        match self {
            Self::Mesen if ntsc => MESEN_NTSC,
            Self::Mesen => MESEN_PAL,
            Self::Fceumm if ntsc => FCEUMM_NTSC,
            Self::Fceumm => FCEUMM_PAL,
            Self::Integer if ntsc => INTEGER_NTSC,
            Self::Integer => INTEGER_PAL,
        }
    }

    /// The emulator must pace itself to whole frame rates.
    pub fn is_integer(self) -> bool {
        self == Self::Integer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_round_trip_through_names() {
        for mode in [FpsMode::Mesen, FpsMode::Fceumm, FpsMode::Integer] {
            assert_eq!(FpsMode::from_option_value(mode.as_option_value()), Some(mode));
        }
        // labels are not values
        assert_eq!(FpsMode::from_option_value("Mesen"), None);
    }

    #[test]
    fn rates_by_model() {
        assert!((FpsMode::Mesen.frame_rate(ConsoleModel::Ntsc) - 60.0988).abs() < 1e-4);
        assert!((FpsMode::Mesen.frame_rate(ConsoleModel::Pal) - 50.0070).abs() < 1e-4);
        assert!((FpsMode::Fceumm.frame_rate(ConsoleModel::Ntsc) - 60.0998).abs() < 1e-4);
        assert!((FpsMode::Fceumm.frame_rate(ConsoleModel::Pal) - 50.0070).abs() < 1e-4);
        assert_eq!(FpsMode::Integer.frame_rate(ConsoleModel::Ntsc), 60.0);
        assert_eq!(FpsMode::Integer.frame_rate(ConsoleModel::Dendy), 50.0);
        assert_eq!(
            FpsMode::Mesen.frame_rate(ConsoleModel::Dendy),
            FpsMode::Mesen.frame_rate(ConsoleModel::Pal)
        );
    }

    #[test]
    fn region_option_values() {
        assert_eq!(ConsoleModel::from_region_option("Auto"), None);
        assert_eq!(
            ConsoleModel::from_region_option("Dendy"),
            Some(ConsoleModel::Dendy)
        );
        assert!(FpsMode::Integer.is_integer());
        assert!(!FpsMode::Fceumm.is_integer());
    }
}
