use serde::Serialize;
use tracing::warn;

use super::scan::{scan_values, ValueScan};
use crate::error::TranscodeError;
use crate::lifecycle::{BufferKind, BufferLedger};
use crate::schema::{OptionDef, Schema};

/// Between the description and the value list.
pub const SEPARATOR: &str = ": ";
/// Between two values.
pub const DELIMITER: char = '|';

/// One packed option of the oldest generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable<'a> {
    pub key: &'a str,
    pub value: String,
}

impl Variable<'_> {
    /// Size of the host-side buffer, terminator included.
    pub fn buffer_size(&self) -> usize {
        self.value.len() + 1
    }
}

/// Oldest-generation payload, one variable per described option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct V0Payload<'a> {
    pub variables: Vec<Variable<'a>>,
}

impl V0Payload<'_> {
    pub fn option_count(&self) -> usize {
        self.variables.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }
}

/// Length of the packed string, without terminator. An empty value list
/// packs to the description and separator alone.
pub fn packed_len(description: &str, scan: &ValueScan) -> usize {
    description.len() + SEPARATOR.len() + scan.total_len + scan.count.saturating_sub(1)
}

/// Builds `"<description>: <default>|<value>|..."` into a buffer reserved
/// for exactly the packed length plus terminator.
///
/// Returns `Ok(None)` for options the oldest generation cannot show.
pub fn pack_option<'a>(
    option: &OptionDef<'a>,
    ledger: &mut BufferLedger<'_>,
) -> Result<Option<Variable<'a>>, TranscodeError> {
    let Some(description) = option.description else {
        return Ok(None);
    };
    let scan = scan_values(option);
    if scan.count == 0 {
        warn!(option = option.id, "option has no values; skipping");
        return Ok(None);
    }
    let len = packed_len(description, &scan);
    let mut packed = ledger.string(BufferKind::PackedString, len + 1)?;

    packed.push_str(description);
    packed.push_str(SEPARATOR);
    packed.push_str(option.values[scan.default_index].value);
    for (idx, value) in option.values.iter().enumerate() {
        if idx != scan.default_index {
            packed.push(DELIMITER);
            packed.push_str(value.value);
        }
    }
    debug_assert_eq!(packed.len(), len);

    Ok(Some(Variable {
        key: option.id,
        value: packed,
    }))
}

/// Packs every described option of `schema`, in schema order.
///
/// The first failed allocation aborts the whole payload; buffers already
/// handed out stay on the ledger for release.
pub fn transcode_v0<'a>(
    schema: &Schema<'a>,
    ledger: &mut BufferLedger<'_>,
) -> Result<V0Payload<'a>, TranscodeError> {
    let mut variables = ledger.vec(BufferKind::VariableTable, schema.options.len())?;
    for option in schema.options {
        if let Some(variable) = pack_option(option, ledger)? {
            variables.push(variable);
        }
    }
    Ok(V0Payload { variables })
}
