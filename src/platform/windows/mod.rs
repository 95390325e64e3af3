//! Windows-specific implementation using Win32 API and COM.
//!
//! This module contains all code that calls into the `windows` crate:
//! - Process and thread listing via toolhelp snapshots
//! - Window enumeration and extended style get/set
//! - `ITaskbarList` tab registration

pub mod process;
pub mod taskbar;
pub mod window;

pub use taskbar::NativeTaskbar;

use windows::Win32::Foundation::HWND;

use crate::model::WindowHandle;

/// Native process and window queries.
///
/// Stateless: every call goes straight to the OS.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDesktop;

impl NativeDesktop {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut _)
}

/// Error code carried by a `windows::core::Error`.
pub(crate) fn error_code(e: &windows::core::Error) -> u32 {
    e.code().0 as u32
}
