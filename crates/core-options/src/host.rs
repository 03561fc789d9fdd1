//! The host's negotiation callbacks.

use crate::error::RegistrationError;
use crate::transcode::{V0Payload, V1Payload, V2Payload};

/// Callbacks exposed by the frontend that loads the core.
///
/// Queries return `None` when the host does not implement them; callers treat
/// that as "host is minimal" and fall back, never as an error.
///
/// A registration call returning `Err` means the host did not receive the
/// payload at all; negotiation then reports that nothing was registered.
pub trait Host {
    /// Highest option protocol version the host understands.
    fn query_protocol_version(&mut self) -> Option<u32>;

    /// Raw code of the host's active language.
    fn query_active_language(&mut self) -> Option<u32>;

    /// Registers categories and options by reference. Returns whether the
    /// host displays categories.
    fn register_options_v2(&mut self, payload: &V2Payload<'_>) -> Result<bool, RegistrationError>;

    /// Registers flattened base and overlay option arrays.
    fn register_options_v1(&mut self, payload: &V1Payload<'_>) -> Result<(), RegistrationError>;

    /// Registers packed `(key, "description: default|other|...")` variables.
    ///
    /// Takes the payload by value so the packed strings, reserved with room
    /// for a terminator, can be handed on without copying.
    fn register_legacy_variables(
        &mut self,
        payload: V0Payload<'_>,
    ) -> Result<(), RegistrationError>;

    /// Current value of an option, if the host has one.
    fn get_variable(&mut self, _key: &str) -> Option<String> {
        None
    }
}

impl<H: Host + ?Sized> Host for &mut H {
    fn query_protocol_version(&mut self) -> Option<u32> {
        (**self).query_protocol_version()
    }

    fn query_active_language(&mut self) -> Option<u32> {
        (**self).query_active_language()
    }

    fn register_options_v2(&mut self, payload: &V2Payload<'_>) -> Result<bool, RegistrationError> {
        (**self).register_options_v2(payload)
    }

    fn register_options_v1(&mut self, payload: &V1Payload<'_>) -> Result<(), RegistrationError> {
        (**self).register_options_v1(payload)
    }

    fn register_legacy_variables(
        &mut self,
        payload: V0Payload<'_>,
    ) -> Result<(), RegistrationError> {
        (**self).register_legacy_variables(payload)
    }

    fn get_variable(&mut self, key: &str) -> Option<String> {
        (**self).get_variable(key)
    }
}
