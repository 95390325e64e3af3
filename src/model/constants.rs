//! Configuration constants and default values.
//!
//! This module contains every window-style bit the tool reads or writes,
//! along with CLI tokens and config file locations.

use super::types::StrategyKind;

// === Window Long Indices ===

/// `GetWindowLong` index of the base window style.
pub const GWL_STYLE: i32 = -16;

/// `GetWindowLong` index of the extended window style.
pub const GWL_EXSTYLE: i32 = -20;

// === Base Style Bits (GWL_STYLE) ===

/// Window is visible.
pub const WS_VISIBLE: u32 = 0x1000_0000;

/// Window is a child window.
pub const WS_CHILD: u32 = 0x4000_0000;

// === Extended Style Bits (GWL_EXSTYLE) ===

/// Tool window: no taskbar button, no Alt+Tab entry.
pub const WS_EX_TOOLWINDOW: u32 = 0x0000_0080;

/// App window: forces a taskbar button while the window is visible.
pub const WS_EX_APPWINDOW: u32 = 0x0004_0000;

// === CLI ===

/// Visibility token that means "show in taskbar". Anything else hides.
pub const SHOW_TOKEN: &str = "show";

/// Executable suffix ignored when matching process names.
pub const EXE_SUFFIX: &str = ".exe";

/// Strategy used when neither the CLI nor the config picks one.
pub const DEFAULT_STRATEGY: StrategyKind = StrategyKind::Taskbar;

// === Config File ===

/// Directory under `%APPDATA%` holding the config file.
pub const CONFIG_DIR_NAME: &str = "TaskbarToggle";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.json";
