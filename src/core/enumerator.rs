//! Discovers the visible top-level windows of a process.
//!
//! Windows are collected per thread (one snapshot per thread) and filtered
//! on the `WS_VISIBLE` bit. OS order is preserved.

use tracing::debug;

use super::capability::WindowApi;
use crate::model::{ProcessInfo, WindowInfo, WS_CHILD, WS_VISIBLE};

/// Filtering knobs for the enumerator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumerateOptions {
    /// Drop windows with `WS_CHILD` set. Off by default, which keeps
    /// child-styled top-level windows in the output.
    pub skip_child_windows: bool,
}

/// Whether a window with base style `style` passes the filter.
pub fn is_eligible(style: u32, options: EnumerateOptions) -> bool {
    let is_visible = style & WS_VISIBLE != 0;
    let is_child = style & WS_CHILD != 0;
    is_visible && !(options.skip_child_windows && is_child)
}

/// Lazily yields every visible top-level window owned by `process`.
///
/// Each call queries the OS again; the returned iterator cannot be restarted.
pub fn visible_windows<'a>(
    api: &'a dyn WindowApi,
    process: &'a ProcessInfo,
    options: EnumerateOptions,
) -> impl Iterator<Item = WindowInfo> + 'a {
    process
        .thread_ids
        .iter()
        .flat_map(move |&thread_id| api.thread_windows(thread_id))
        .filter(move |&handle| {
            let style = api.style(handle);
            let eligible = is_eligible(style, options);
            debug!(
                event = "enumerator.window_checked",
                pid = process.pid,
                handle = %handle,
                style = format_args!("{style:08x}"),
                eligible
            );
            eligible
        })
        .map(move |handle| WindowInfo {
            handle,
            caption: api.caption(handle),
        })
}

/// The process's main window: the first visible window without an owner.
pub fn main_window(
    api: &dyn WindowApi,
    process: &ProcessInfo,
    options: EnumerateOptions,
) -> Option<WindowInfo> {
    visible_windows(api, process, options).find(|window| !api.has_owner(window.handle))
}
