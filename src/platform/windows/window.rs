//! Window enumeration and style access through user32.

use tracing::debug;
use windows::core::BOOL;
use windows::Win32::Foundation::{
    GetLastError, SetLastError, ERROR_SUCCESS, HWND, LPARAM, TRUE, WIN32_ERROR,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumThreadWindows, GetWindow, GetWindowLongW, GetWindowTextLengthW, GetWindowTextW,
    SetWindowLongW, GWL_EXSTYLE, GWL_STYLE, GW_OWNER, WS_CHILD, WS_EX_APPWINDOW,
    WS_EX_TOOLWINDOW, WS_VISIBLE,
};

use super::{hwnd, NativeDesktop};
use crate::core::WindowApi;
use crate::errors::ToggleError;
use crate::model::{constants, WindowHandle};

const _: () = {
    assert!(GWL_STYLE.0 == constants::GWL_STYLE);
    assert!(GWL_EXSTYLE.0 == constants::GWL_EXSTYLE);
    assert!(WS_VISIBLE.0 == constants::WS_VISIBLE);
    assert!(WS_CHILD.0 == constants::WS_CHILD);
    assert!(WS_EX_TOOLWINDOW.0 == constants::WS_EX_TOOLWINDOW);
    assert!(WS_EX_APPWINDOW.0 == constants::WS_EX_APPWINDOW);
};

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // Recover our Vec<WindowHandle> from lparam and push.
    let out: &mut Vec<WindowHandle> = unsafe { &mut *(lparam.0 as *mut _) };
    out.push(WindowHandle(hwnd.0 as isize));
    TRUE // continue enumeration
}

fn os_error(operation: &'static str, window: WindowHandle, code: WIN32_ERROR) -> ToggleError {
    ToggleError::OsCallFailed {
        operation,
        handle: window,
        code: code.0,
    }
}

impl WindowApi for NativeDesktop {
    fn thread_windows(&self, thread_id: u32) -> Vec<WindowHandle> {
        let mut handles: Vec<WindowHandle> = Vec::new();
        unsafe {
            // Pass a pointer to our Vec via LPARAM. Returns FALSE for threads
            // without windows, which is just an empty list.
            let param = LPARAM(&mut handles as *mut _ as isize);
            let _ = EnumThreadWindows(thread_id, Some(collect_window), param);
        }
        debug!(
            event = "platform.thread_windows",
            thread_id,
            count = handles.len()
        );
        handles
    }

    fn style(&self, window: WindowHandle) -> u32 {
        unsafe { GetWindowLongW(hwnd(window), GWL_STYLE) as u32 }
    }

    fn ex_style(&self, window: WindowHandle) -> Result<u32, ToggleError> {
        unsafe {
            // A zero style is valid, so only the last-error value tells failure apart.
            SetLastError(ERROR_SUCCESS);
            let style = GetWindowLongW(hwnd(window), GWL_EXSTYLE);
            if style == 0 {
                let err = GetLastError();
                if err != ERROR_SUCCESS {
                    return Err(os_error("GetWindowLong", window, err));
                }
            }
            Ok(style as u32)
        }
    }

    fn set_ex_style(&self, window: WindowHandle, ex_style: u32) -> Result<(), ToggleError> {
        unsafe {
            // Returns the previous value, which may legitimately be zero.
            SetLastError(ERROR_SUCCESS);
            let previous = SetWindowLongW(hwnd(window), GWL_EXSTYLE, ex_style as i32);
            if previous == 0 {
                let err = GetLastError();
                if err != ERROR_SUCCESS {
                    return Err(os_error("SetWindowLong", window, err));
                }
            }
        }
        Ok(())
    }

    fn caption(&self, window: WindowHandle) -> String {
        unsafe {
            let len = GetWindowTextLengthW(hwnd(window));
            if len <= 0 {
                return String::new();
            }
            let mut buf = vec![0u16; len as usize + 1];
            let copied = GetWindowTextW(hwnd(window), &mut buf);
            String::from_utf16_lossy(&buf[..copied.max(0) as usize])
        }
    }

    fn has_owner(&self, window: WindowHandle) -> bool {
        unsafe {
            GetWindow(hwnd(window), GW_OWNER)
                .map(|owner| !owner.is_invalid())
                .unwrap_or(false)
        }
    }
}
