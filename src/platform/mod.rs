//! Platform bindings for the core capability traits.
//!
//! - `windows`: native Win32 + COM implementation (Windows only)
//! - `mock`: in-memory desktop for tests, available everywhere

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use self::windows::{NativeDesktop, NativeTaskbar};
