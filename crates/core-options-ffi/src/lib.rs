//! Registers core options through a libretro environment callback.
//!
//! [`EnvironmentHost`] adapts the callback to [`core_options::Host`]: probes
//! and queries become environment commands, payloads are marshaled into the
//! host's NUL-terminated C arrays for the duration of each call.

pub mod abi;
pub mod env;
pub mod marshal;

use core_options::{
    negotiate, LocaleTable, NegotiationConfig, NegotiationOutcome, OptionValues, Schema,
};

pub use abi::retro_environment_t;
pub use env::EnvironmentHost;
pub use marshal::MarshalError;

/// Negotiates and registers `table` with the frontend behind `environ`.
///
/// # Safety
///
/// See [`EnvironmentHost::new`].
pub unsafe fn set_core_options(
    environ: retro_environment_t,
    table: &LocaleTable<'_>,
    config: &NegotiationConfig,
) -> NegotiationOutcome {
    let mut host = EnvironmentHost::new(environ);
    negotiate(&mut host, table, config)
}

/// Current option values as the frontend reports them.
///
/// # Safety
///
/// See [`EnvironmentHost::new`].
pub unsafe fn load_option_values(
    environ: retro_environment_t,
    schema: &Schema<'_>,
) -> OptionValues {
    let mut host = EnvironmentHost::new(environ);
    OptionValues::load(&mut host, schema)
}
