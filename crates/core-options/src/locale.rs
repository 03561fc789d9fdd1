//! Selection of the base schema and an optional locale overlay.

use tracing::debug;

use crate::host::Host;
use crate::schema::{Language, LocaleTable, Schema};

/// Base schema plus the overlay for the host's language, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub base: &'a Schema<'a>,
    pub overlay: Option<&'a Schema<'a>>,
    /// Registration goes through the host's localized entry points.
    pub localized: bool,
}

impl<'a> Resolved<'a> {
    /// Base schema for the localized entry points, without an overlay.
    pub fn base_only(base: &'a Schema<'a>) -> Self {
        Self {
            base,
            overlay: None,
            localized: true,
        }
    }

    /// Base schema for the non-localized entry points.
    pub fn unlocalized(base: &'a Schema<'a>) -> Self {
        Self {
            base,
            overlay: None,
            localized: false,
        }
    }
}

/// Picks the overlay matching the host's active language.
///
/// Any miss (no answer, unknown code, base language, no table entry) yields
/// the base schema alone.
pub fn resolve<'a, H: Host + ?Sized>(host: &mut H, table: &LocaleTable<'a>) -> Resolved<'a> {
    let base = table.base();
    let Some(code) = host.query_active_language() else {
        debug!("host did not report a language; using base schema");
        return Resolved::base_only(base);
    };
    let Some(language) = Language::from_code(code) else {
        debug!(code, "unrecognized host language; using base schema");
        return Resolved::base_only(base);
    };
    if language == table.base_language() {
        return Resolved::base_only(base);
    }
    let overlay = table.get(language);
    debug!(%language, has_overlay = overlay.is_some(), "resolved option locale");
    Resolved {
        base,
        overlay,
        localized: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistrationError;
    use crate::transcode::{V0Payload, V1Payload, V2Payload};

    struct LanguageHost(Option<u32>);

    impl Host for LanguageHost {
        fn query_protocol_version(&mut self) -> Option<u32> {
            Some(2)
        }

        fn query_active_language(&mut self) -> Option<u32> {
            self.0
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
    }

    #[test]
    fn resolution_matrix() {
        let base = Schema::default();
        let french = Schema::default();
        let table = LocaleTable::new(&base).with_locale(Language::French, &french);

        let cases: [(Option<u32>, bool); 5] = [
            (None, false),
            (Some(Language::English.code()), false),
            (Some(Language::COUNT + 3), false),
            (Some(Language::German.code()), false),
            (Some(Language::French.code()), true),
        ];
        for (code, expect_overlay) in cases {
            let resolved = resolve(&mut LanguageHost(code), &table);
            assert!(std::ptr::eq(resolved.base, &base), "{code:?}");
            assert!(resolved.localized);
            match resolved.overlay {
                Some(overlay) => {
                    assert!(expect_overlay, "{code:?}");
                    assert!(std::ptr::eq(overlay, &french));
                }
                None => assert!(!expect_overlay, "{code:?}"),
            }
        }
    }
}
