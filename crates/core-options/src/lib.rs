//! Core option negotiation for emulator cores.
//!
//! A core describes its options once, as a [`Schema`] per locale. At startup
//! [`negotiate`] asks the host which option protocol it speaks and registers
//! the schema in that generation's format:
//!
//! - **v2**: categories and localized schemas, passed by reference
//! - **v1**: flat option arrays, base plus locale overlay
//! - **v0**: one `"description: default|other|..."` string per option
//!
//! # Example
//!
//! ```
//! use core_options::{
//!     negotiate, Host, LocaleTable, NegotiationConfig, OptionDef, OptionValue,
//!     RegistrationError, Schema, V0Payload, V1Payload, V2Payload,
//! };
//!
//! struct LegacyHost(Vec<(String, String)>);
//!
//! impl Host for LegacyHost {
//!     fn query_protocol_version(&mut self) -> Option<u32> { None }
//!     fn query_active_language(&mut self) -> Option<u32> { None }
//!     fn register_options_v2(&mut self, _: &V2Payload<'_>) -> Result<bool, RegistrationError> {
//!         Ok(false)
//!     }
//!     fn register_options_v1(&mut self, _: &V1Payload<'_>) -> Result<(), RegistrationError> {
//!         Ok(())
//!     }
//!     fn register_legacy_variables(
//!         &mut self,
//!         payload: V0Payload<'_>,
//!     ) -> Result<(), RegistrationError> {
//!         for v in payload.variables {
//!             self.0.push((v.key.to_owned(), v.value));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! const VALUES: &[OptionValue<'static>] = &[OptionValue::new("off"), OptionValue::new("on")];
//! const OPTIONS: &[OptionDef<'static>] = &[OptionDef {
//!     id: "core_turbo",
//!     title: "Turbo",
//!     subtitle: None,
//!     description: Some("Turbo mode"),
//!     category_id: None,
//!     values: VALUES,
//!     default_value: Some("on"),
//! }];
//! let schema = Schema::new(&[], OPTIONS);
//!
//! let mut host = LegacyHost(Vec::new());
//! let outcome = negotiate(&mut host, &LocaleTable::new(&schema), &NegotiationConfig::default());
//! assert_eq!(outcome.registered_options(), 1);
//! assert_eq!(host.0[0].1, "Turbo mode: on|off");
//! ```

pub mod error;
pub mod host;
pub mod lifecycle;
pub mod locale;
pub mod negotiate;
pub mod probe;
pub mod schema;
pub mod transcode;
pub mod values;

pub use error::{NegotiationError, RegistrationError, TranscodeError};
pub use host::Host;
pub use lifecycle::{BufferAllocator, BufferKind, BufferLedger, Lease, SystemAllocator};
pub use locale::{resolve, Resolved};
pub use negotiate::{negotiate, negotiate_with, NegotiationConfig, NegotiationOutcome};
pub use probe::{probe, ProtocolGeneration};
pub use schema::{Category, Language, LocaleTable, OptionDef, OptionValue, Schema};
pub use transcode::{
    transcode, FlatOption, Payload, V0Payload, V1Payload, V2Payload, Variable,
};
pub use values::OptionValues;
