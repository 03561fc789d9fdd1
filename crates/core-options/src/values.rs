//! Current option values as chosen on the host.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::host::Host;
use crate::schema::{OptionDef, Schema};

/// Resolved `option id -> selected value` mapping the engine reads from.
///
/// Every entry holds one of the option's listed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionValues {
    values: BTreeMap<String, String>,
}

impl OptionValues {
    /// Every option at its effective default.
    pub fn defaults(schema: &Schema<'_>) -> Self {
        let values = schema
            .options
            .iter()
            .filter_map(|option| {
                option
                    .effective_default()
                    .map(|value| (option.id.to_owned(), value.to_owned()))
            })
            .collect();
        Self { values }
    }

    /// Reads every option from the host.
    pub fn load<H: Host + ?Sized>(host: &mut H, schema: &Schema<'_>) -> Self {
        let mut values = Self::default();
        values.refresh(host, schema);
        values
    }

    /// Re-reads every option and returns the ids whose value changed.
    ///
    /// A value the host does not report, or one not listed for the option,
    /// resolves to the option's effective default.
    pub fn refresh<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        schema: &Schema<'_>,
    ) -> Vec<String> {
        let mut changed = Vec::new();
        for option in schema.options {
            let Some(value) = select(host, option) else {
                continue;
            };
            if self.values.get(option.id).map(String::as_str) != Some(value.as_str()) {
                changed.push(option.id.to_owned());
                self.values.insert(option.id.to_owned(), value);
            }
        }
        changed
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// `true` when the option is set to `"enabled"`.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.get(id) == Some("enabled")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn select<H: Host + ?Sized>(host: &mut H, option: &OptionDef<'_>) -> Option<String> {
    if let Some(current) = host.get_variable(option.id) {
        if option.find_value(&current).is_some() {
            return Some(current);
        }
        warn!(
            option = option.id,
            value = %current,
            "host reported an unlisted value; using default"
        );
    }
    option.effective_default().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::schema::OptionValue;
    use crate::error::RegistrationError;
    use crate::transcode::{V0Payload, V1Payload, V2Payload};

    #[derive(Default)]
    struct VariableHost(HashMap<&'static str, &'static str>);

    impl Host for VariableHost {
        fn query_protocol_version(&mut self) -> Option<u32> {
            None
        }

        fn query_active_language(&mut self) -> Option<u32> {
            None
        }

        fn register_options_v2(&mut self, _: &V2Payload<'_>) -> Result<bool, RegistrationError> {
            Ok(false)
        }

        fn register_options_v1(&mut self, _: &V1Payload<'_>) -> Result<(), RegistrationError> {
            Ok(())
        }

        fn register_legacy_variables(&mut self, _: V0Payload<'_>) -> Result<(), RegistrationError> {
            Ok(())
        }

        fn get_variable(&mut self, key: &str) -> Option<String> {
            self.0.get(key).map(|v| (*v).to_owned())
        }
    }

    const TOGGLE: &[OptionValue<'static>] =
        &[OptionValue::new("disabled"), OptionValue::new("enabled")];
    const FPS: &[OptionValue<'static>] = &[
        OptionValue::labeled("fps_mesen", "Mesen"),
        OptionValue::labeled("fps_integer", "Integer"),
    ];
    const OPTIONS: &[OptionDef<'static>] = &[
        OptionDef {
            id: "stereo",
            title: "Stereo",
            subtitle: None,
            description: None,
            category_id: None,
            values: TOGGLE,
            default_value: Some("disabled"),
        },
        OptionDef {
            id: "fps",
            title: "FPS",
            subtitle: None,
            description: None,
            category_id: None,
            // label, not value: falls back to the first value
            values: FPS,
            default_value: Some("Mesen"),
        },
        OptionDef {
            id: "broken",
            title: "Broken",
            subtitle: None,
            description: None,
            category_id: None,
            values: &[],
            default_value: None,
        },
    ];
    static SCHEMA: Schema<'static> = Schema::new(&[], OPTIONS);

    #[test]
    fn defaults_use_effective_default() {
        let values = OptionValues::defaults(&SCHEMA);
        assert_eq!(values.get("stereo"), Some("disabled"));
        assert_eq!(values.get("fps"), Some("fps_mesen"));
        assert_eq!(values.get("broken"), None);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn load_prefers_listed_host_values() {
        let mut host = VariableHost::default();
        host.0.insert("stereo", "enabled");
        host.0.insert("fps", "fps_turbo");
        let values = OptionValues::load(&mut host, &SCHEMA);
        assert!(values.is_enabled("stereo"));
        assert_eq!(values.get("fps"), Some("fps_mesen"));
    }

    #[test]
    fn refresh_reports_changes_only() {
        let mut host = VariableHost::default();
        let mut values = OptionValues::load(&mut host, &SCHEMA);
        assert!(values.refresh(&mut host, &SCHEMA).is_empty());

        host.0.insert("fps", "fps_integer");
        assert_eq!(values.refresh(&mut host, &SCHEMA), vec!["fps".to_owned()]);
        assert_eq!(values.get("fps"), Some("fps_integer"));
        assert_eq!(
            values.iter().collect::<Vec<_>>(),
            vec![("fps", "fps_integer"), ("stereo", "disabled")]
        );
    }
}
