//! Conversion of payloads into NUL-terminated C arrays.
//!
//! Every marshaled value owns the strings its raw pointers refer to; the
//! pointers stay valid until the value is dropped. Allocations are fallible:
//! running out of memory surfaces as [`MarshalError::Reserve`].

use std::collections::TryReserveError;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use core_options::{FlatOption, OptionValue, Schema, V0Payload};
use thiserror::Error;
use tracing::warn;

use crate::abi::{
    retro_core_option_definition, retro_core_option_v2_category,
    retro_core_option_v2_definition, retro_core_option_value, retro_core_options_v2,
    retro_variable, RETRO_NUM_CORE_OPTION_VALUES_MAX,
};

/// Text that cannot cross into C.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarshalError {
    #[error("{field} of {key:?} contains a NUL byte at offset {position}")]
    InteriorNul {
        key: String,
        field: &'static str,
        position: usize,
    },
    #[error("failed to reserve {what} of {len} elements: {source}")]
    Reserve {
        what: &'static str,
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Empty vector with room for exactly `len` elements.
fn reserved<T>(what: &'static str, len: usize) -> Result<Vec<T>, MarshalError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|source| MarshalError::Reserve { what, len, source })?;
    Ok(buf)
}

/// Owner of every C string handed to the host.
#[derive(Debug, Default)]
pub struct CStringArena {
    strings: Vec<CString>,
}

impl CStringArena {
    pub fn intern(
        &mut self,
        key: &str,
        field: &'static str,
        text: &str,
    ) -> Result<*const c_char, MarshalError> {
        let mut bytes = reserved(field, text.len() + 1)?;
        bytes.extend_from_slice(text.as_bytes());
        self.adopt(key, field, bytes)
    }

    /// Takes ownership of `text`. When it has a spare byte of capacity the
    /// terminator is written in place and the buffer is not copied.
    pub fn adopt(
        &mut self,
        key: &str,
        field: &'static str,
        text: impl Into<Vec<u8>>,
    ) -> Result<*const c_char, MarshalError> {
        let owned = CString::new(text).map_err(|err| MarshalError::InteriorNul {
            key: key.to_owned(),
            field,
            position: err.nul_position(),
        })?;
        let len = self.strings.len() + 1;
        self.strings
            .try_reserve(1)
            .map_err(|source| MarshalError::Reserve {
                what: "string table",
                len,
                source,
            })?;
        // the heap buffer does not move with the CString
        let raw = owned.as_ptr();
        self.strings.push(owned);
        Ok(raw)
    }

    /// Null for `None`.
    pub fn intern_opt(
        &mut self,
        key: &str,
        field: &'static str,
        text: Option<&str>,
    ) -> Result<*const c_char, MarshalError> {
        match text {
            Some(text) => self.intern(key, field, text),
            None => Ok(ptr::null()),
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Fills a fixed value array. Lists longer than the array holds are cut so
/// the terminator entry survives.
fn value_array(
    arena: &mut CStringArena,
    key: &str,
    values: &[OptionValue<'_>],
) -> Result<[retro_core_option_value; RETRO_NUM_CORE_OPTION_VALUES_MAX], MarshalError> {
    let capacity = RETRO_NUM_CORE_OPTION_VALUES_MAX - 1;
    if values.len() > capacity {
        warn!(
            option = key,
            count = values.len(),
            kept = capacity,
            "value list exceeds host capacity; truncating"
        );
    }
    let mut out = [retro_core_option_value::TERMINATOR; RETRO_NUM_CORE_OPTION_VALUES_MAX];
    for (slot, value) in out.iter_mut().zip(values.iter().take(capacity)) {
        slot.value = arena.intern(key, "value", value.value)?;
        slot.label = arena.intern_opt(key, "label", value.label)?;
    }
    Ok(out)
}

/// A schema as `retro_core_options_v2`.
#[derive(Debug)]
pub struct OptionsV2 {
    _arena: CStringArena,
    _categories: Vec<retro_core_option_v2_category>,
    _definitions: Vec<retro_core_option_v2_definition>,
    raw: retro_core_options_v2,
}

impl OptionsV2 {
    pub fn marshal(schema: &Schema<'_>) -> Result<Self, MarshalError> {
        let mut arena = CStringArena::default();

        let mut categories = reserved("categories", schema.categories.len() + 1)?;
        for category in schema.categories {
            categories.push(retro_core_option_v2_category {
                key: arena.intern(category.id, "category key", category.id)?,
                desc: arena.intern(category.id, "category title", category.title)?,
                info: arena.intern(category.id, "category description", category.description)?,
            });
        }
        categories.push(retro_core_option_v2_category::TERMINATOR);

        let mut definitions = reserved("definitions", schema.options.len() + 1)?;
        for option in schema.options {
            let key = option.id;
            definitions.push(retro_core_option_v2_definition {
                key: arena.intern(key, "key", key)?,
                desc: arena.intern(key, "title", option.title)?,
                desc_categorized: arena.intern_opt(key, "subtitle", option.subtitle)?,
                info: arena.intern_opt(key, "description", option.description)?,
                info_categorized: ptr::null(),
                category_key: arena.intern_opt(key, "category", option.category_id)?,
                values: value_array(&mut arena, key, option.values)?,
                default_value: arena.intern_opt(key, "default value", option.default_value)?,
            });
        }
        definitions.push(retro_core_option_v2_definition::TERMINATOR);

        let raw = retro_core_options_v2 {
            categories: categories.as_mut_ptr(),
            definitions: definitions.as_mut_ptr(),
        };
        Ok(Self {
            _arena: arena,
            _categories: categories,
            _definitions: definitions,
            raw,
        })
    }

    pub fn as_mut_ptr(&mut self) -> *mut retro_core_options_v2 {
        &mut self.raw
    }
}

/// Flattened options as a terminated `retro_core_option_definition` array.
#[derive(Debug)]
pub struct Definitions {
    _arena: CStringArena,
    definitions: Vec<retro_core_option_definition>,
}

impl Definitions {
    pub fn marshal(options: &[FlatOption<'_>]) -> Result<Self, MarshalError> {
        let mut arena = CStringArena::default();
        let mut definitions = reserved("definitions", options.len() + 1)?;
        for option in options {
            let key = option.key;
            definitions.push(retro_core_option_definition {
                key: arena.intern(key, "key", key)?,
                desc: arena.intern(key, "title", option.desc)?,
                info: arena.intern(key, "description", option.info)?,
                values: value_array(&mut arena, key, &option.values)?,
                default_value: arena.intern(key, "default value", option.default_value)?,
            });
        }
        definitions.push(retro_core_option_definition::TERMINATOR);
        Ok(Self {
            _arena: arena,
            definitions,
        })
    }

    pub fn as_mut_ptr(&mut self) -> *mut retro_core_option_definition {
        self.definitions.as_mut_ptr()
    }
}

/// Packed legacy variables as a terminated `retro_variable` array.
#[derive(Debug)]
pub struct Variables {
    _arena: CStringArena,
    variables: Vec<retro_variable>,
}

impl Variables {
    /// Consumes the payload; each packed string becomes the C string the
    /// host reads.
    pub fn marshal(payload: V0Payload<'_>) -> Result<Self, MarshalError> {
        let mut arena = CStringArena::default();
        let mut variables = reserved("variables", payload.variables.len() + 1)?;
        for variable in payload.variables {
            variables.push(retro_variable {
                key: arena.intern(variable.key, "key", variable.key)?,
                value: arena.adopt(variable.key, "packed value", variable.value)?,
            });
        }
        variables.push(retro_variable::TERMINATOR);
        Ok(Self {
            _arena: arena,
            variables,
        })
    }

    pub fn as_mut_ptr(&mut self) -> *mut retro_variable {
        self.variables.as_mut_ptr()
    }
}
