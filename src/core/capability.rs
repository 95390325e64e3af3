//! Platform capabilities the core depends on.
//!
//! The enumerator, strategies and driver only see these traits. The native
//! Win32/COM binding lives in `platform::windows`, the test double in
//! `platform::mock`.

use crate::errors::ToggleError;
use crate::model::{ProcessInfo, WindowHandle};

/// OS process listing.
pub trait ProcessApi {
    /// All running processes with their owned thread ids, in OS order.
    fn list_processes(&self) -> Result<Vec<ProcessInfo>, ToggleError>;
}

/// OS window queries and the extended style writer.
pub trait WindowApi {
    /// Snapshot of the top-level windows owned by one thread.
    fn thread_windows(&self, thread_id: u32) -> Vec<WindowHandle>;

    /// Base style bits (`GWL_STYLE`). Holds `WS_VISIBLE` and `WS_CHILD`.
    fn style(&self, window: WindowHandle) -> u32;

    /// Extended style bits (`GWL_EXSTYLE`).
    fn ex_style(&self, window: WindowHandle) -> Result<u32, ToggleError>;

    fn set_ex_style(&self, window: WindowHandle, ex_style: u32) -> Result<(), ToggleError>;

    /// Caption text, empty when the window has none.
    fn caption(&self, window: WindowHandle) -> String;

    /// Whether the window has an owner window.
    fn has_owner(&self, window: WindowHandle) -> bool;
}

/// Shell taskbar tab registration.
pub trait TaskbarApi {
    /// One-time setup. Must succeed before any tab call.
    fn init(&self) -> Result<(), ToggleError>;

    fn add_tab(&self, window: WindowHandle) -> Result<(), ToggleError>;

    fn delete_tab(&self, window: WindowHandle) -> Result<(), ToggleError>;
}
