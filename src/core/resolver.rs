//! Maps a process name to the running processes that carry it.

use tracing::info;

use super::capability::ProcessApi;
use crate::errors::ToggleError;
use crate::model::{ProcessInfo, EXE_SUFFIX};

/// Strip a trailing `.exe` (any case).
fn stem(name: &str) -> &str {
    let name = name.trim();
    let split = name.len().saturating_sub(EXE_SUFFIX.len());
    match (name.get(..split), name.get(split..)) {
        (Some(head), Some(tail)) if tail.eq_ignore_ascii_case(EXE_SUFFIX) => head,
        _ => name,
    }
}

/// Case-insensitive exact match, with `.exe` optional on both sides.
pub fn name_matches(requested: &str, actual: &str) -> bool {
    stem(requested).eq_ignore_ascii_case(stem(actual))
}

/// All running processes named `name`, in OS order.
///
/// Returns [`ToggleError::ProcessNotFound`] when nothing matches.
pub fn resolve(api: &dyn ProcessApi, name: &str) -> Result<Vec<ProcessInfo>, ToggleError> {
    let matches: Vec<ProcessInfo> = api
        .list_processes()?
        .into_iter()
        .filter(|process| name_matches(name, &process.name))
        .collect();

    info!(
        event = "resolver.completed",
        process = name,
        matches = matches.len()
    );

    if matches.is_empty() {
        return Err(ToggleError::ProcessNotFound {
            name: name.to_string(),
        });
    }
    Ok(matches)
}
