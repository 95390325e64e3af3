//! Application domain model.
//!
//! This module contains pure data (no FFI dependencies): the style-bit
//! constants table and the process/window types the core passes around.
//!
//! Platform-specific bindings are in `platform::windows`.

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::{ProcessInfo, StrategyKind, Visibility, WindowHandle, WindowInfo, WindowScope};
