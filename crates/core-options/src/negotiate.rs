//! One-shot option negotiation with the host.

use tracing::{debug, error};

use crate::error::NegotiationError;
use crate::host::Host;
use crate::lifecycle::{BufferAllocator, BufferLedger, SystemAllocator};
use crate::locale::{resolve, Resolved};
use crate::probe::{probe, ProtocolGeneration};
use crate::schema::LocaleTable;
use crate::transcode::transcode;

/// Caller-owned negotiation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegotiationConfig {
    /// Query the host language and register through the localized entry
    /// points. When off, only the base schema is registered.
    pub localization: bool,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self { localization: true }
    }
}

impl NegotiationConfig {
    pub fn without_localization() -> Self {
        Self {
            localization: false,
        }
    }
}

/// What the host ended up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationOutcome {
    Registered {
        generation: ProtocolGeneration,
        options: usize,
        categories_supported: bool,
    },
    NothingRegistered {
        generation: ProtocolGeneration,
        reason: NegotiationError,
    },
}

impl NegotiationOutcome {
    pub fn generation(&self) -> ProtocolGeneration {
        match self {
            Self::Registered { generation, .. } | Self::NothingRegistered { generation, .. } => {
                *generation
            }
        }
    }

    pub fn registered_options(&self) -> usize {
        match self {
            Self::Registered { options, .. } => *options,
            Self::NothingRegistered { .. } => 0,
        }
    }

    /// Whether the host displays option categories.
    pub fn categories_supported(&self) -> bool {
        matches!(
            self,
            Self::Registered {
                categories_supported: true,
                ..
            }
        )
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }
}

/// Probes the host, transcodes the schema for its generation and registers it.
pub fn negotiate<H: Host + ?Sized>(
    host: &mut H,
    table: &LocaleTable<'_>,
    config: &NegotiationConfig,
) -> NegotiationOutcome {
    negotiate_with(host, table, config, &SystemAllocator)
}

/// [`negotiate`] with every transient buffer accounted through `allocator`.
///
/// All buffers are released before this returns, whether registration
/// happened or transcoding aborted.
pub fn negotiate_with<H: Host + ?Sized>(
    host: &mut H,
    table: &LocaleTable<'_>,
    config: &NegotiationConfig,
    allocator: &dyn BufferAllocator,
) -> NegotiationOutcome {
    let generation = probe(host);
    let resolved = resolve_for(host, table, config, generation);

    let mut ledger = BufferLedger::new(allocator);
    let registered = transcode(resolved, generation, &mut ledger)
        .map_err(NegotiationError::from)
        .and_then(|payload| {
            let options = payload.option_count();
            let categories_supported = payload.register(host)?;
            Ok((options, categories_supported))
        });
    let outcome = match registered {
        Ok((options, categories_supported)) => {
            debug!(
                %generation,
                options,
                categories_supported,
                buffers = ledger.outstanding(),
                "registered core options"
            );
            NegotiationOutcome::Registered {
                generation,
                options,
                categories_supported,
            }
        }
        Err(reason) => {
            error!(%generation, %reason, "core option negotiation aborted");
            NegotiationOutcome::NothingRegistered { generation, reason }
        }
    };
    ledger.release_all();
    outcome
}

/// Schemas to register for `generation`. Only generations with locale
/// support consult the host language.
fn resolve_for<'a, H: Host + ?Sized>(
    host: &mut H,
    table: &LocaleTable<'a>,
    config: &NegotiationConfig,
    generation: ProtocolGeneration,
) -> Resolved<'a> {
    if config.localization && generation.supports_locale() {
        resolve(host, table)
    } else {
        Resolved::unlocalized(table.base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RegistrationError, TranscodeError};
    use crate::lifecycle::BufferKind;
    use crate::schema::{Language, OptionDef, OptionValue, Schema};
    use crate::transcode::{V0Payload, V1Payload, V2Payload};

    /// Answers every query and refuses every registration.
    struct RefusingHost {
        version: Option<u32>,
        language_queries: usize,
    }

    impl Host for RefusingHost {
        fn query_protocol_version(&mut self) -> Option<u32> {
            self.version
        }

        fn query_active_language(&mut self) -> Option<u32> {
            self.language_queries += 1;
            Some(Language::French.code())
        }

        fn register_options_v2(&mut self, _: &V2Payload<'_>) -> Result<bool, RegistrationError> {
            Err(RegistrationError::new("v2 refused"))
        }

        fn register_options_v1(&mut self, _: &V1Payload<'_>) -> Result<(), RegistrationError> {
            Err(RegistrationError::new("v1 refused"))
        }

        fn register_legacy_variables(&mut self, _: V0Payload<'_>) -> Result<(), RegistrationError> {
            Err(RegistrationError::new("v0 refused"))
        }
    }

    const VALUES: &[OptionValue<'static>] = &[OptionValue::new("a"), OptionValue::new("b")];
    const OPTIONS: &[OptionDef<'static>] = &[OptionDef {
        id: "core_pick",
        title: "Pick",
        subtitle: None,
        description: Some("Pick one"),
        category_id: None,
        values: VALUES,
        default_value: None,
    }];
    static BASE: Schema<'static> = Schema::new(&[], OPTIONS);
    static FRENCH: Schema<'static> = Schema::new(&[], OPTIONS);

    #[test]
    fn host_rejection_registers_nothing() {
        let table = LocaleTable::new(&BASE);
        for (version, generation, message) in [
            (Some(2), ProtocolGeneration::V2, "v2 refused"),
            (Some(1), ProtocolGeneration::V1, "v1 refused"),
            (None, ProtocolGeneration::V0, "v0 refused"),
        ] {
            let mut host = RefusingHost {
                version,
                language_queries: 0,
            };
            let outcome = negotiate(&mut host, &table, &NegotiationConfig::default());
            assert_eq!(
                outcome,
                NegotiationOutcome::NothingRegistered {
                    generation,
                    reason: RegistrationError::new(message).into(),
                }
            );
            assert_eq!(outcome.registered_options(), 0);
        }
    }

    #[test]
    fn legacy_generation_skips_locale_resolution() {
        let table = LocaleTable::new(&BASE).with_locale(Language::French, &FRENCH);
        let mut host = RefusingHost {
            version: None,
            language_queries: 0,
        };
        let config = NegotiationConfig::default();

        let resolved = resolve_for(&mut host, &table, &config, ProtocolGeneration::V0);
        assert_eq!(resolved, Resolved::unlocalized(&BASE));
        assert_eq!(host.language_queries, 0);

        let resolved = resolve_for(&mut host, &table, &config, ProtocolGeneration::V1);
        assert!(resolved.localized);
        assert!(resolved.overlay.is_some());
        assert_eq!(host.language_queries, 1);
    }

    #[test]
    fn outcome_accessors() {
        let registered = NegotiationOutcome::Registered {
            generation: ProtocolGeneration::V2,
            options: 4,
            categories_supported: true,
        };
        assert!(registered.is_registered());
        assert!(registered.categories_supported());
        assert_eq!(registered.registered_options(), 4);

        let aborted = NegotiationOutcome::NothingRegistered {
            generation: ProtocolGeneration::V0,
            reason: TranscodeError::Refused {
                kind: BufferKind::PackedString,
                len: 9,
            }
            .into(),
        };
        assert!(!aborted.is_registered());
        assert!(!aborted.categories_supported());
        assert_eq!(aborted.registered_options(), 0);
        assert_eq!(aborted.generation(), ProtocolGeneration::V0);
    }

    #[test]
    fn default_config_localizes() {
        assert!(NegotiationConfig::default().localization);
        assert!(!NegotiationConfig::without_localization().localization);
    }
}
