#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use core_options::{
    BufferAllocator, BufferKind, Category, Host, OptionDef, OptionValue, RegistrationError,
    Schema, V0Payload, V1Payload, V2Payload,
};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Recording host
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    V2(Value),
    V1(Value),
    V0(Vec<(String, String)>),
}

/// Host double answering from fixed fields and recording every registration.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub version: Option<u32>,
    pub language: Option<u32>,
    pub categories_supported: bool,
    pub variables: HashMap<String, String>,
    pub version_queries: usize,
    pub language_queries: usize,
    pub calls: Vec<Call>,
}

impl RecordingHost {
    pub fn new(version: Option<u32>) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: u32) -> Self {
        self.language = Some(language);
        self
    }

    pub fn legacy_variables(&self) -> Option<&[(String, String)]> {
        self.calls.iter().find_map(|call| match call {
            Call::V0(vars) => Some(vars.as_slice()),
            _ => None,
        })
    }
}

impl Host for RecordingHost {
    fn query_protocol_version(&mut self) -> Option<u32> {
        self.version_queries += 1;
        self.version
    }

    fn query_active_language(&mut self) -> Option<u32> {
        self.language_queries += 1;
        self.language
    }

    fn register_options_v2(&mut self, payload: &V2Payload<'_>) -> Result<bool, RegistrationError> {
        self.calls.push(Call::V2(serde_json::to_value(payload).unwrap()));
        Ok(self.categories_supported)
    }

    fn register_options_v1(&mut self, payload: &V1Payload<'_>) -> Result<(), RegistrationError> {
        self.calls.push(Call::V1(serde_json::to_value(payload).unwrap()));
        Ok(())
    }

    fn register_legacy_variables(
        &mut self,
        payload: V0Payload<'_>,
    ) -> Result<(), RegistrationError> {
        let vars = payload
            .variables
            .into_iter()
            .map(|v| (v.key.to_owned(), v.value))
            .collect();
        self.calls.push(Call::V0(vars));
        Ok(())
    }

    fn get_variable(&mut self, key: &str) -> Option<String> {
        self.variables.get(key).cloned()
    }
}

// ---------------------------------------------------------------------------
// Allocation-counting allocator
// ---------------------------------------------------------------------------

/// Counts grants and releases; optionally refuses the n-th request (0-based).
#[derive(Debug, Default)]
pub struct CountingAllocator {
    fail_at: Option<usize>,
    requests: Cell<usize>,
    granted: Cell<usize>,
    released: Cell<usize>,
    refused_kind: Cell<Option<BufferKind>>,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    pub fn granted(&self) -> usize {
        self.granted.get()
    }

    pub fn released(&self) -> usize {
        self.released.get()
    }

    pub fn live(&self) -> usize {
        self.granted.get() - self.released.get()
    }

    pub fn refused_kind(&self) -> Option<BufferKind> {
        self.refused_kind.get()
    }
}

impl BufferAllocator for CountingAllocator {
    fn acquire(&self, kind: BufferKind, _len: usize) -> bool {
        let idx = self.requests.get();
        self.requests.set(idx + 1);
        if self.fail_at == Some(idx) {
            self.refused_kind.set(Some(kind));
            return false;
        }
        self.granted.set(self.granted.get() + 1);
        true
    }

    fn release(&self, _kind: BufferKind, _len: usize) {
        assert!(
            self.released.get() < self.granted.get(),
            "release without a matching grant"
        );
        self.released.set(self.released.get() + 1);
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub const REGION_DESCRIPTION: &str = "Change the region of the emulated system.";

pub const REGIONS: &[OptionValue<'static>] = &[
    OptionValue::labeled("Auto", "Auto"),
    OptionValue::labeled("NTSC", "NTSC"),
    OptionValue::labeled("PAL", "PAL"),
    OptionValue::labeled("Dendy", "Dendy"),
];

pub const TOGGLE: &[OptionValue<'static>] =
    &[OptionValue::new("disabled"), OptionValue::new("enabled")];

pub const SPEEDS: &[OptionValue<'static>] = &[
    OptionValue::labeled("Disabled", "disabled"),
    OptionValue::new("Slow"),
    OptionValue::new("Normal"),
    OptionValue::new("Fast"),
];

pub const CATEGORIES: &[Category<'static>] = &[
    Category {
        id: "system",
        title: "System",
        description: "Change hardware-related settings.",
    },
    Category {
        id: "input",
        title: "Input",
        description: "Change input-related settings.",
    },
];

pub const OPTIONS: &[OptionDef<'static>] = &[
    OptionDef {
        id: "mesen_region",
        title: "System Region",
        subtitle: None,
        description: Some(REGION_DESCRIPTION),
        category_id: Some("system"),
        values: REGIONS,
        default_value: Some("Auto"),
    },
    OptionDef {
        id: "mesen_fdsautoinsertdisk",
        title: "FDS - Auto-insert Disks",
        subtitle: Some("Auto-insert Disks"),
        description: Some("Automatically insert disks."),
        category_id: Some("system"),
        values: TOGGLE,
        default_value: Some("disabled"),
    },
    OptionDef {
        id: "mesen_hidden",
        title: "Hidden",
        subtitle: None,
        description: None,
        category_id: Some("system"),
        values: TOGGLE,
        default_value: Some("enabled"),
    },
    OptionDef {
        id: "mesen_controllerturbospeed",
        title: "Controller Turbo Speed",
        subtitle: None,
        description: Some("Set the turbo speed."),
        category_id: Some("input"),
        values: SPEEDS,
        default_value: Some("Fast"),
    },
];

pub static BASE: Schema<'static> = Schema::new(CATEGORIES, OPTIONS);

pub const OPTIONS_FR: &[OptionDef<'static>] = &[
    OptionDef {
        id: "mesen_region",
        title: "Région du système",
        subtitle: None,
        description: Some("Changer la région du système émulé."),
        category_id: Some("system"),
        values: REGIONS,
        default_value: Some("Auto"),
    },
    OptionDef {
        id: "mesen_only_in_french",
        title: "Seulement en français",
        subtitle: None,
        description: None,
        category_id: None,
        values: TOGGLE,
        default_value: None,
    },
];

pub static FRENCH: Schema<'static> = Schema::new(CATEGORIES, OPTIONS_FR);

/// Owned backing storage for a generated option.
#[derive(Debug, Clone)]
pub struct OwnedOption {
    pub id: String,
    pub description: Option<String>,
    pub values: Vec<String>,
    pub default_value: Option<String>,
}

/// Borrowed views over owned options; keeps both alive together.
pub fn with_schema<R>(owned: &[OwnedOption], f: impl FnOnce(&Schema<'_>) -> R) -> R {
    let values: Vec<Vec<OptionValue<'_>>> = owned
        .iter()
        .map(|o| o.values.iter().map(|v| OptionValue::new(v)).collect())
        .collect();
    let options: Vec<OptionDef<'_>> = owned
        .iter()
        .zip(values.iter())
        .map(|(o, vals)| OptionDef {
            id: &o.id,
            title: &o.id,
            subtitle: None,
            description: o.description.as_deref(),
            category_id: None,
            values: vals,
            default_value: o.default_value.as_deref(),
        })
        .collect();
    let schema = Schema::new(&[], &options);
    f(&schema)
}
