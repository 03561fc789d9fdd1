//! [`Host`] over a libretro environment callback.

use std::ffi::{CStr, CString};
use std::os::raw::{c_uint, c_void};
use std::ptr;

use core_options::{Host, RegistrationError, V0Payload, V1Payload, V2Payload};
use tracing::{debug, warn};

use crate::abi::{
    retro_core_options_intl, retro_core_options_v2_intl, retro_environment_t, retro_variable,
    RETRO_ENVIRONMENT_GET_CORE_OPTIONS_VERSION, RETRO_ENVIRONMENT_GET_LANGUAGE,
    RETRO_ENVIRONMENT_GET_VARIABLE, RETRO_ENVIRONMENT_SET_CORE_OPTIONS,
    RETRO_ENVIRONMENT_SET_CORE_OPTIONS_INTL, RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2,
    RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2_INTL, RETRO_ENVIRONMENT_SET_VARIABLES,
};
use crate::marshal::{Definitions, MarshalError, OptionsV2, Variables};

pub struct EnvironmentHost {
    environ: retro_environment_t,
}

impl EnvironmentHost {
    /// # Safety
    ///
    /// `environ` must follow the libretro environment contract for every
    /// command this host issues: it reads only through the pointer it is
    /// given and does not retain it past the call.
    pub unsafe fn new(environ: retro_environment_t) -> Self {
        Self { environ }
    }

    /// Issues `cmd` with `data` as its argument.
    ///
    /// `data` must be valid for the command's reads and writes until the
    /// callback returns.
    fn call<T>(&mut self, cmd: c_uint, data: *mut T) -> bool {
        // SAFETY: callers pass pointers into values they keep alive across
        // the call; the callback contract was accepted in `new`.
        unsafe { (self.environ)(cmd, data.cast::<c_void>()) }
    }

    fn query_uint(&mut self, cmd: c_uint) -> Option<u32> {
        let mut answer: c_uint = 0;
        self.call(cmd, &mut answer as *mut c_uint).then_some(answer)
    }

    fn register_v2(&mut self, payload: &V2Payload<'_>) -> Result<bool, MarshalError> {
        let mut us = OptionsV2::marshal(payload.base)?;
        if !payload.localized {
            return Ok(self.call(RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2, us.as_mut_ptr()));
        }
        let mut local = payload.overlay.map(OptionsV2::marshal).transpose()?;
        let mut intl = retro_core_options_v2_intl {
            us: us.as_mut_ptr(),
            local: local
                .as_mut()
                .map_or(ptr::null_mut(), OptionsV2::as_mut_ptr),
        };
        Ok(self.call(RETRO_ENVIRONMENT_SET_CORE_OPTIONS_V2_INTL, &mut intl as *mut _))
    }

    fn register_v1(&mut self, payload: &V1Payload<'_>) -> Result<bool, MarshalError> {
        let mut us = Definitions::marshal(&payload.base)?;
        if !payload.localized {
            return Ok(self.call(RETRO_ENVIRONMENT_SET_CORE_OPTIONS, us.as_mut_ptr()));
        }
        let mut local = payload
            .overlay
            .as_deref()
            .map(Definitions::marshal)
            .transpose()?;
        let mut intl = retro_core_options_intl {
            us: us.as_mut_ptr(),
            local: local
                .as_mut()
                .map_or(ptr::null_mut(), Definitions::as_mut_ptr),
        };
        Ok(self.call(RETRO_ENVIRONMENT_SET_CORE_OPTIONS_INTL, &mut intl as *mut _))
    }
}

impl Host for EnvironmentHost {
    fn query_protocol_version(&mut self) -> Option<u32> {
        self.query_uint(RETRO_ENVIRONMENT_GET_CORE_OPTIONS_VERSION)
    }

    fn query_active_language(&mut self) -> Option<u32> {
        self.query_uint(RETRO_ENVIRONMENT_GET_LANGUAGE)
    }

    fn register_options_v2(&mut self, payload: &V2Payload<'_>) -> Result<bool, RegistrationError> {
        self.register_v2(payload).map_err(RegistrationError::new)
    }

    fn register_options_v1(&mut self, payload: &V1Payload<'_>) -> Result<(), RegistrationError> {
        let accepted = self.register_v1(payload).map_err(RegistrationError::new)?;
        if !accepted {
            debug!("frontend did not acknowledge v1 core options");
        }
        Ok(())
    }

    fn register_legacy_variables(
        &mut self,
        payload: V0Payload<'_>,
    ) -> Result<(), RegistrationError> {
        let mut variables = Variables::marshal(payload).map_err(RegistrationError::new)?;
        if !self.call(RETRO_ENVIRONMENT_SET_VARIABLES, variables.as_mut_ptr()) {
            debug!("frontend did not acknowledge legacy variables");
        }
        Ok(())
    }

    fn get_variable(&mut self, key: &str) -> Option<String> {
        let Ok(c_key) = CString::new(key) else {
            warn!(key, "option key contains a NUL byte");
            return None;
        };
        let mut variable = retro_variable {
            key: c_key.as_ptr(),
            value: ptr::null(),
        };
        let found = self.call(RETRO_ENVIRONMENT_GET_VARIABLE, &mut variable as *mut _);
        if !found || variable.value.is_null() {
            return None;
        }
        // SAFETY: the host answered with a NUL-terminated string it owns.
        let value = unsafe { CStr::from_ptr(variable.value) };
        match value.to_str() {
            Ok(value) => Some(value.to_owned()),
            Err(_) => {
                warn!(key, "host returned a non-UTF-8 option value");
                None
            }
        }
    }
}
