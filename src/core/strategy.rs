//! Visibility strategies: extended-style rewrite and taskbar tab registration.

use tracing::{debug, info};

use super::capability::{TaskbarApi, WindowApi};
use crate::errors::ToggleError;
use crate::model::{StrategyKind, Visibility, WindowInfo, WS_EX_APPWINDOW, WS_EX_TOOLWINDOW};

/// Extended style for "show in taskbar".
///
/// Note: masking with `WS_EX_APPWINDOW` keeps only that bit (and only if it
/// was already set), so every other extended style bit is lost. This matches
/// the tool's established behavior and is left as is until confirmed.
pub fn show_style(ex_style: u32) -> u32 {
    (ex_style | WS_EX_TOOLWINDOW) & WS_EX_APPWINDOW
}

/// Extended style for "hide from taskbar": set TOOLWINDOW, clear APPWINDOW.
pub fn hide_style(ex_style: u32) -> u32 {
    (ex_style | WS_EX_TOOLWINDOW) & !WS_EX_APPWINDOW
}

pub fn next_ex_style(ex_style: u32, visibility: Visibility) -> u32 {
    match visibility {
        Visibility::Show => show_style(ex_style),
        Visibility::Hide => hide_style(ex_style),
    }
}

/// What a strategy did to one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    StyleRewritten { previous: u32, current: u32 },
    TabAdded,
    TabRemoved,
}

/// One way of changing a window's taskbar presence.
pub trait VisibilityStrategy {
    fn kind(&self) -> StrategyKind;

    /// Run once before the first `apply`. Calling it again is a no-op.
    fn prepare(&mut self) -> Result<(), ToggleError> {
        Ok(())
    }

    fn apply(&mut self, window: &WindowInfo, visibility: Visibility)
        -> Result<Applied, ToggleError>;
}

/// Read-modify-write of the window's extended style.
pub struct StyleFlagStrategy<'a> {
    windows: &'a dyn WindowApi,
}

impl<'a> StyleFlagStrategy<'a> {
    pub fn new(windows: &'a dyn WindowApi) -> Self {
        Self { windows }
    }
}

impl VisibilityStrategy for StyleFlagStrategy<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::StyleFlag
    }

    fn apply(
        &mut self,
        window: &WindowInfo,
        visibility: Visibility,
    ) -> Result<Applied, ToggleError> {
        let previous = self.windows.ex_style(window.handle)?;
        let current = next_ex_style(previous, visibility);

        debug!(
            event = "strategy.style_computed",
            handle = %window.handle,
            previous = format_args!("{previous:08x}"),
            current = format_args!("{current:08x}")
        );

        self.windows.set_ex_style(window.handle, current)?;
        Ok(Applied::StyleRewritten { previous, current })
    }
}

/// Adds or deletes the window's tab through the shell taskbar list.
pub struct TaskbarStrategy<'a> {
    taskbar: &'a dyn TaskbarApi,
    initialized: bool,
}

impl<'a> TaskbarStrategy<'a> {
    pub fn new(taskbar: &'a dyn TaskbarApi) -> Self {
        Self {
            taskbar,
            initialized: false,
        }
    }
}

impl VisibilityStrategy for TaskbarStrategy<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Taskbar
    }

    fn prepare(&mut self) -> Result<(), ToggleError> {
        if self.initialized {
            return Ok(());
        }
        self.taskbar.init()?;
        self.initialized = true;
        info!(event = "strategy.taskbar_initialized");
        Ok(())
    }

    fn apply(
        &mut self,
        window: &WindowInfo,
        visibility: Visibility,
    ) -> Result<Applied, ToggleError> {
        self.prepare()?;
        match visibility {
            Visibility::Show => {
                self.taskbar.add_tab(window.handle)?;
                Ok(Applied::TabAdded)
            }
            Visibility::Hide => {
                self.taskbar.delete_tab(window.handle)?;
                Ok(Applied::TabRemoved)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_sets_toolwindow_and_clears_appwindow() {
        assert_eq!(hide_style(0x0000_0100), 0x0000_0180);
        assert_eq!(hide_style(WS_EX_APPWINDOW), WS_EX_TOOLWINDOW);
    }

    #[test]
    fn show_keeps_only_appwindow() {
        assert_eq!(show_style(0xFFFF_FFFF), 0x0004_0000);
        assert_eq!(show_style(0x0000_0100), 0);
    }

    #[test]
    fn hide_show_hide_is_not_a_round_trip() {
        let start = 0x0004_0300;
        let hidden = hide_style(start);
        let shown = show_style(hidden);
        let hidden_again = hide_style(shown);
        assert_eq!(hidden, 0x0000_0380);
        assert_eq!(shown, 0);
        assert_eq!(hidden_again, WS_EX_TOOLWINDOW);
        assert_ne!(hidden_again, hidden);
    }

    #[test]
    fn next_ex_style_dispatches_on_visibility() {
        let style = 0x1234_5678;
        assert_eq!(next_ex_style(style, Visibility::Show), show_style(style));
        assert_eq!(next_ex_style(style, Visibility::Hide), hide_style(style));
    }
}
