use serde::Serialize;

use super::scan::scan_values;
use crate::error::TranscodeError;
use crate::lifecycle::{BufferKind, BufferLedger};
use crate::locale::Resolved;
use crate::schema::{OptionValue, Schema};

/// An option as the middle generation sees it: no category, no subtitle.
///
/// Metadata fields are never absent; a missing description becomes `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatOption<'a> {
    pub key: &'a str,
    pub desc: &'a str,
    pub info: &'a str,
    pub values: Vec<OptionValue<'a>>,
    pub default_value: &'a str,
}

/// Middle-generation payload. The host merges `overlay` into `base` by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct V1Payload<'a> {
    pub base: Vec<FlatOption<'a>>,
    pub overlay: Option<Vec<FlatOption<'a>>>,
    pub localized: bool,
}

impl V1Payload<'_> {
    pub fn option_count(&self) -> usize {
        self.base.len()
    }
}

/// Copies every option of `schema` into a flat array, dropping categories.
///
/// Strings are borrowed from the schema; only the arrays are allocated.
pub fn flatten<'a>(
    schema: &Schema<'a>,
    ledger: &mut BufferLedger<'_>,
) -> Result<Vec<FlatOption<'a>>, TranscodeError> {
    let mut flat: Vec<FlatOption<'a>> =
        ledger.vec(BufferKind::FlatOptions, schema.options.len())?;
    for option in schema.options {
        let scan = scan_values(option);
        let mut values: Vec<OptionValue<'a>> = ledger.vec(BufferKind::FlatValues, scan.count)?;
        values.extend_from_slice(option.values);
        flat.push(FlatOption {
            key: option.id,
            desc: option.title,
            info: option.description.unwrap_or(""),
            values,
            default_value: option.default_value.unwrap_or(""),
        });
    }
    Ok(flat)
}

pub fn transcode_v1<'a>(
    resolved: &Resolved<'a>,
    ledger: &mut BufferLedger<'_>,
) -> Result<V1Payload<'a>, TranscodeError> {
    let base = flatten(resolved.base, ledger)?;
    let overlay = match resolved.overlay {
        Some(overlay) => Some(flatten(overlay, ledger)?),
        None => None,
    };
    Ok(V1Payload {
        base,
        overlay,
        localized: resolved.localized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::SystemAllocator;
    use crate::schema::{Category, OptionDef};

    const VALUES: &[OptionValue<'static>] = &[
        OptionValue::labeled("a", "Alpha"),
        OptionValue::new("b"),
    ];

    fn def(id: &'static str, description: Option<&'static str>) -> OptionDef<'static> {
        OptionDef {
            id,
            title: "Title",
            subtitle: Some("Sub"),
            description,
            category_id: Some("cat"),
            values: VALUES,
            default_value: Some("b"),
        }
    }

    #[test]
    fn flatten_copies_metadata_and_values() {
        let categories = [Category {
            id: "cat",
            title: "Cat",
            description: "Category",
        }];
        let options = [def("one", Some("Info")), def("two", None)];
        let schema = Schema::new(&categories, &options);
        let mut ledger = BufferLedger::new(&SystemAllocator);
        let flat = flatten(&schema, &mut ledger).unwrap();

        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].key, "one");
        assert_eq!(flat[0].desc, "Title");
        assert_eq!(flat[0].info, "Info");
        assert_eq!(flat[0].default_value, "b");
        assert_eq!(flat[0].values, VALUES);
        assert_eq!(flat[1].info, "");
        // one options array plus one value array per option
        assert_eq!(ledger.outstanding(), 3);
    }

    #[test]
    fn overlay_is_flattened_separately() {
        let base_options = [def("one", Some("Info"))];
        let local_options = [def("one", Some("Infos")), def("extra", None)];
        let base = Schema::new(&[], &base_options);
        let local = Schema::new(&[], &local_options);
        let resolved = Resolved {
            base: &base,
            overlay: Some(&local),
            localized: true,
        };
        let mut ledger = BufferLedger::new(&SystemAllocator);
        let payload = transcode_v1(&resolved, &mut ledger).unwrap();

        assert_eq!(payload.option_count(), 1);
        assert_eq!(payload.base[0].info, "Info");
        let overlay = payload.overlay.as_ref().unwrap();
        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay[0].info, "Infos");
        assert_eq!(overlay[1].key, "extra");
    }
}
