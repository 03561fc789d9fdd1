use serde::Serialize;

/// A named group of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

/// One selectable value of an option.
///
/// An absent `label` means the host displays `value` verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionValue<'a> {
    pub value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}

impl<'a> OptionValue<'a> {
    pub const fn new(value: &'a str) -> Self {
        Self { value, label: None }
    }

    pub const fn labeled(value: &'a str, label: &'a str) -> Self {
        Self {
            value,
            label: Some(label),
        }
    }

    /// Text shown to the user for this value.
    pub fn display(&self) -> &'a str {
        self.label.unwrap_or(self.value)
    }
}

/// A user-adjustable option with an ordered list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionDef<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category_id: Option<&'a str>,
    pub values: &'a [OptionValue<'a>],
    pub default_value: Option<&'a str>,
}

impl<'a> OptionDef<'a> {
    /// Index of the value equal to `default_value`.
    ///
    /// Falls back to 0 when `default_value` is absent or matches no value.
    pub fn default_index(&self) -> usize {
        self.default_value
            .and_then(|default| self.values.iter().position(|v| v.value == default))
            .unwrap_or(0)
    }

    /// Value the host should select when the user has made no choice.
    ///
    /// `None` only for an option without values.
    pub fn effective_default(&self) -> Option<&'a str> {
        self.values.get(self.default_index()).map(|v| v.value)
    }

    pub fn find_value(&self, value: &str) -> Option<&OptionValue<'a>> {
        self.values.iter().find(|v| v.value == value)
    }
}

/// Categories plus options for one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Schema<'a> {
    pub categories: &'a [Category<'a>],
    pub options: &'a [OptionDef<'a>],
}

impl<'a> Schema<'a> {
    pub const fn new(categories: &'a [Category<'a>], options: &'a [OptionDef<'a>]) -> Self {
        Self {
            categories,
            options,
        }
    }

    pub fn option(&self, id: &str) -> Option<&OptionDef<'a>> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category<'a>> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Options filed under `category_id`, in schema order.
    pub fn options_in<'s>(
        &'s self,
        category_id: &'s str,
    ) -> impl Iterator<Item = &'s OptionDef<'a>> + 's {
        self.options
            .iter()
            .filter(move |o| o.category_id == Some(category_id))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
