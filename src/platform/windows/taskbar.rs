//! Shell taskbar tab registration via `ITaskbarList`.
//!
//! The COM apartment and the taskbar list object are created on the first
//! `init()` and released when `NativeTaskbar` is dropped.

use std::cell::RefCell;

use tracing::{debug, info};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoUninitialize, CLSCTX_INPROC_SERVER,
    COINIT_APARTMENTTHREADED,
};
use windows::Win32::UI::Shell::{ITaskbarList, TaskbarList};

use super::{error_code, hwnd};
use crate::core::TaskbarApi;
use crate::errors::ToggleError;
use crate::model::WindowHandle;

/// Balances a successful `CoInitializeEx`.
struct ComApartment;

impl ComApartment {
    fn enter() -> windows::core::Result<Self> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()? };
        Ok(Self)
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

// Field order matters: the list must be released before the apartment.
struct ComTaskbar {
    list: ITaskbarList,
    _apartment: ComApartment,
}

/// Lazily initialized shell taskbar list.
#[derive(Default)]
pub struct NativeTaskbar {
    inner: RefCell<Option<ComTaskbar>>,
}

impl NativeTaskbar {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_list<F>(
        &self,
        operation: &'static str,
        window: WindowHandle,
        f: F,
    ) -> Result<(), ToggleError>
    where
        F: FnOnce(&ITaskbarList) -> windows::core::Result<()>,
    {
        let inner = self.inner.borrow();
        let taskbar = inner.as_ref().ok_or(ToggleError::TaskbarUnavailable { code: 0 })?;
        f(&taskbar.list).map_err(|e| ToggleError::OsCallFailed {
            operation,
            handle: window,
            code: error_code(&e),
        })?;
        debug!(event = "platform.taskbar_call", operation, handle = %window);
        Ok(())
    }
}

impl TaskbarApi for NativeTaskbar {
    fn init(&self) -> Result<(), ToggleError> {
        if self.inner.borrow().is_some() {
            return Ok(());
        }

        let unavailable = |e: windows::core::Error| ToggleError::TaskbarUnavailable {
            code: error_code(&e),
        };

        let apartment = ComApartment::enter().map_err(unavailable)?;
        let list: ITaskbarList = unsafe {
            CoCreateInstance(&TaskbarList, None, CLSCTX_INPROC_SERVER).map_err(unavailable)?
        };
        unsafe { list.HrInit() }.map_err(unavailable)?;

        *self.inner.borrow_mut() = Some(ComTaskbar {
            list,
            _apartment: apartment,
        });
        info!(event = "platform.taskbar_ready");
        Ok(())
    }

    fn add_tab(&self, window: WindowHandle) -> Result<(), ToggleError> {
        self.with_list("AddTab", window, |list| unsafe { list.AddTab(hwnd(window)) })
    }

    fn delete_tab(&self, window: WindowHandle) -> Result<(), ToggleError> {
        self.with_list("DeleteTab", window, |list| unsafe {
            list.DeleteTab(hwnd(window))
        })
    }
}
