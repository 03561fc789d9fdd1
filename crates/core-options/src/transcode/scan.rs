use crate::schema::OptionDef;

/// Single pass summary of an option's value list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueScan {
    pub count: usize,
    /// Index of `default_value`, 0 when it matches nothing.
    pub default_index: usize,
    /// Sum of the byte lengths of every `value`.
    pub total_len: usize,
}

pub fn scan_values(option: &OptionDef<'_>) -> ValueScan {
    let mut scan = ValueScan {
        count: 0,
        default_index: 0,
        total_len: 0,
    };
    let mut matched = false;
    for (idx, value) in option.values.iter().enumerate() {
        if !matched && option.default_value == Some(value.value) {
            scan.default_index = idx;
            matched = true;
        }
        scan.total_len += value.value.len();
        scan.count += 1;
    }
    scan
}
