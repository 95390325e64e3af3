//! In-memory desktop used to exercise the core without a live OS.
//!
//! Processes and windows are declared up front; every style write and
//! taskbar call is recorded so tests can assert on them.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::{ProcessApi, TaskbarApi, WindowApi};
use crate::errors::ToggleError;
use crate::model::{ProcessInfo, WindowHandle};

#[derive(Debug, Clone)]
struct MockWindow {
    style: u32,
    ex_style: u32,
    caption: String,
    owned: bool,
}

/// One recorded taskbar call, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarCall {
    Init,
    AddTab(WindowHandle),
    DeleteTab(WindowHandle),
}

/// Fake processes, windows and taskbar list.
#[derive(Debug, Default)]
pub struct MockDesktop {
    processes: Vec<ProcessInfo>,
    thread_windows: HashMap<u32, Vec<WindowHandle>>,
    windows: RefCell<HashMap<WindowHandle, MockWindow>>,
    failing_windows: Vec<WindowHandle>,
    taskbar_init_error: Option<u32>,
    process_list_error: Option<u32>,
    style_writes: RefCell<Vec<(WindowHandle, u32)>>,
    taskbar_calls: RefCell<Vec<TaskbarCall>>,
}

impl MockDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a running process owning `thread_ids`.
    pub fn with_process(mut self, pid: u32, name: &str, thread_ids: &[u32]) -> Self {
        self.processes.push(ProcessInfo {
            pid,
            name: name.to_string(),
            thread_ids: thread_ids.to_vec(),
        });
        self
    }

    /// Add an unowned top-level window to `thread_id`.
    pub fn with_window(
        self,
        thread_id: u32,
        handle: isize,
        style: u32,
        ex_style: u32,
        caption: &str,
    ) -> Self {
        self.insert_window(thread_id, handle, style, ex_style, caption, false)
    }

    /// Add a top-level window that has an owner window.
    pub fn with_owned_window(
        self,
        thread_id: u32,
        handle: isize,
        style: u32,
        ex_style: u32,
        caption: &str,
    ) -> Self {
        self.insert_window(thread_id, handle, style, ex_style, caption, true)
    }

    /// Make every OS call on `handle` fail with `ERROR_ACCESS_DENIED`.
    pub fn with_failing_window(mut self, handle: isize) -> Self {
        self.failing_windows.push(WindowHandle(handle));
        self
    }

    /// Make taskbar initialization fail with `code`.
    pub fn with_taskbar_init_error(mut self, code: u32) -> Self {
        self.taskbar_init_error = Some(code);
        self
    }

    /// Make process listing fail with `code`.
    pub fn with_process_list_error(mut self, code: u32) -> Self {
        self.process_list_error = Some(code);
        self
    }

    fn insert_window(
        mut self,
        thread_id: u32,
        handle: isize,
        style: u32,
        ex_style: u32,
        caption: &str,
        owned: bool,
    ) -> Self {
        let handle = WindowHandle(handle);
        self.thread_windows.entry(thread_id).or_default().push(handle);
        self.windows.get_mut().insert(
            handle,
            MockWindow {
                style,
                ex_style,
                caption: caption.to_string(),
                owned,
            },
        );
        self
    }

    fn check(&self, operation: &'static str, window: WindowHandle) -> Result<(), ToggleError> {
        if self.failing_windows.contains(&window) {
            return Err(ToggleError::OsCallFailed {
                operation,
                handle: window,
                code: ERROR_ACCESS_DENIED,
            });
        }
        Ok(())
    }

    /// Every `set_ex_style` call as `(handle, new style)`.
    pub fn style_writes(&self) -> Vec<(WindowHandle, u32)> {
        self.style_writes.borrow().clone()
    }

    /// Every taskbar call in order.
    pub fn taskbar_calls(&self) -> Vec<TaskbarCall> {
        self.taskbar_calls.borrow().clone()
    }

    /// Current extended style of a window, if it exists.
    pub fn current_ex_style(&self, handle: isize) -> Option<u32> {
        self.windows
            .borrow()
            .get(&WindowHandle(handle))
            .map(|w| w.ex_style)
    }
}

const ERROR_ACCESS_DENIED: u32 = 5;
const ERROR_INVALID_WINDOW_HANDLE: u32 = 1400;

impl ProcessApi for MockDesktop {
    fn list_processes(&self) -> Result<Vec<ProcessInfo>, ToggleError> {
        match self.process_list_error {
            Some(code) => Err(ToggleError::ProcessListFailed { code }),
            None => Ok(self.processes.clone()),
        }
    }
}

impl WindowApi for MockDesktop {
    fn thread_windows(&self, thread_id: u32) -> Vec<WindowHandle> {
        self.thread_windows
            .get(&thread_id)
            .cloned()
            .unwrap_or_default()
    }

    fn style(&self, window: WindowHandle) -> u32 {
        self.windows
            .borrow()
            .get(&window)
            .map(|w| w.style)
            .unwrap_or(0)
    }

    fn ex_style(&self, window: WindowHandle) -> Result<u32, ToggleError> {
        self.check("GetWindowLong", window)?;
        self.windows
            .borrow()
            .get(&window)
            .map(|w| w.ex_style)
            .ok_or(ToggleError::OsCallFailed {
                operation: "GetWindowLong",
                handle: window,
                code: ERROR_INVALID_WINDOW_HANDLE,
            })
    }

    fn set_ex_style(&self, window: WindowHandle, ex_style: u32) -> Result<(), ToggleError> {
        self.check("SetWindowLong", window)?;
        let mut windows = self.windows.borrow_mut();
        let entry = windows.get_mut(&window).ok_or(ToggleError::OsCallFailed {
            operation: "SetWindowLong",
            handle: window,
            code: ERROR_INVALID_WINDOW_HANDLE,
        })?;
        entry.ex_style = ex_style;
        self.style_writes.borrow_mut().push((window, ex_style));
        Ok(())
    }

    fn caption(&self, window: WindowHandle) -> String {
        self.windows
            .borrow()
            .get(&window)
            .map(|w| w.caption.clone())
            .unwrap_or_default()
    }

    fn has_owner(&self, window: WindowHandle) -> bool {
        self.windows
            .borrow()
            .get(&window)
            .is_some_and(|w| w.owned)
    }
}

impl TaskbarApi for MockDesktop {
    fn init(&self) -> Result<(), ToggleError> {
        self.taskbar_calls.borrow_mut().push(TaskbarCall::Init);
        match self.taskbar_init_error {
            Some(code) => Err(ToggleError::TaskbarUnavailable { code }),
            None => Ok(()),
        }
    }

    fn add_tab(&self, window: WindowHandle) -> Result<(), ToggleError> {
        self.check("AddTab", window)?;
        self.taskbar_calls
            .borrow_mut()
            .push(TaskbarCall::AddTab(window));
        Ok(())
    }

    fn delete_tab(&self, window: WindowHandle) -> Result<(), ToggleError> {
        self.check("DeleteTab", window)?;
        self.taskbar_calls
            .borrow_mut()
            .push(TaskbarCall::DeleteTab(window));
        Ok(())
    }
}
