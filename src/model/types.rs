//! Domain types (pure Rust, no FFI).
//!
//! Everything here is re-queried from the OS on each run; nothing is stored.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::constants::SHOW_TOKEN;

/// Raw value of an OS top-level window handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// A running process as reported by the OS process listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    /// Executable file name, e.g. `notepad.exe`.
    pub name: String,
    /// Owned thread ids in OS order.
    pub thread_ids: Vec<u32>,
}

/// A visible top-level window produced by the enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub handle: WindowHandle,
    /// Caption text, may be empty.
    pub caption: String,
}

/// Whether a window should appear in the taskbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Show,
    Hide,
}

impl Visibility {
    /// `show` (any case) means [`Visibility::Show`], anything else hides.
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case(SHOW_TOKEN) {
            Visibility::Show
        } else {
            Visibility::Hide
        }
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Show)
    }

    /// Upper-case label used in status lines.
    pub fn label(self) -> &'static str {
        match self {
            Visibility::Show => "VISIBLE",
            Visibility::Hide => "HIDDEN",
        }
    }
}

/// Mechanism used to change taskbar presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StrategyKind {
    /// Rewrite the TOOLWINDOW/APPWINDOW extended style bits.
    #[serde(rename = "style")]
    StyleFlag,
    /// Add or delete the window's tab through the shell taskbar list.
    #[serde(rename = "taskbar")]
    Taskbar,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::StyleFlag => "style",
            StrategyKind::Taskbar => "taskbar",
        }
    }

    /// Window scope used when none is configured.
    pub fn default_scope(self) -> WindowScope {
        match self {
            StrategyKind::StyleFlag => WindowScope::MainWindow,
            StrategyKind::Taskbar => WindowScope::AllVisible,
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "style" => Ok(StrategyKind::StyleFlag),
            "taskbar" => Ok(StrategyKind::Taskbar),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

/// Which windows of a process the strategy is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum WindowScope {
    /// First visible, unowned top-level window.
    #[serde(rename = "main")]
    MainWindow,
    /// Every visible top-level window across all threads.
    #[serde(rename = "all")]
    AllVisible,
}

impl FromStr for WindowScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" => Ok(WindowScope::MainWindow),
            "all" => Ok(WindowScope::AllVisible),
            other => Err(format!("unknown window scope '{other}'")),
        }
    }
}
