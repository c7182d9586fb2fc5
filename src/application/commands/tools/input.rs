use crate::application::validation::ValidationErrors;
use crate::domain::catalog::RecordId;

/// Validate a list of raw ids, recording the first bad one against `field`.
pub(super) fn record_ids(
    errors: &mut ValidationErrors,
    field: &str,
    raw: &[i64],
) -> Option<Vec<RecordId>> {
    let mut ids = Vec::with_capacity(raw.len());
    for id in raw {
        ids.push(errors.capture(field, RecordId::new(*id))?);
    }
    ids.sort_unstable();
    ids.dedup();
    Some(ids)
}

pub(super) fn optional_text(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
