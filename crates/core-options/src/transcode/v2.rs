use serde::Serialize;

use crate::locale::Resolved;
use crate::schema::Schema;

/// Newest-generation payload: the schemas themselves, by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct V2Payload<'a> {
    pub base: &'a Schema<'a>,
    pub overlay: Option<&'a Schema<'a>>,
    pub localized: bool,
}

/// Wraps the resolved schemas without copying; the host merges base and
/// overlay itself.
pub fn transcode_v2<'a>(resolved: &Resolved<'a>) -> V2Payload<'a> {
    V2Payload {
        base: resolved.base,
        overlay: resolved.overlay,
        localized: resolved.localized,
    }
}
