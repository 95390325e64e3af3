//! Tests for window enumeration and process resolution.

use taskbar_toggle::core::{main_window, resolve, visible_windows, EnumerateOptions};
use taskbar_toggle::model::{ProcessInfo, WindowHandle, WS_CHILD, WS_VISIBLE};
use taskbar_toggle::platform::mock::MockDesktop;
use taskbar_toggle::ToggleError;

fn process(pid: u32, threads: &[u32]) -> ProcessInfo {
    ProcessInfo {
        pid,
        name: "app.exe".to_string(),
        thread_ids: threads.to_vec(),
    }
}

fn handles(desktop: &MockDesktop, process: &ProcessInfo, options: EnumerateOptions) -> Vec<isize> {
    visible_windows(desktop, process, options)
        .map(|w| w.handle.0)
        .collect()
}

// === Enumerator ===

#[test]
fn only_visible_windows_in_os_order() {
    let desktop = MockDesktop::new()
        .with_window(1, 0x10, WS_VISIBLE, 0, "a")
        .with_window(1, 0x11, 0, 0, "hidden")
        .with_window(1, 0x12, WS_VISIBLE, 0, "b")
        .with_window(2, 0x20, 0x0000_0100, 0, "hidden too")
        .with_window(2, 0x21, WS_VISIBLE | 0x0000_0100, 0, "c");

    let p = process(100, &[1, 2]);
    assert_eq!(
        handles(&desktop, &p, EnumerateOptions::default()),
        vec![0x10, 0x12, 0x21]
    );
}

#[test]
fn captions_are_carried() {
    let desktop = MockDesktop::new().with_window(1, 0x10, WS_VISIBLE, 0, "Untitled - Notepad");
    let p = process(100, &[1]);

    let windows: Vec<_> = visible_windows(&desktop, &p, EnumerateOptions::default()).collect();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].caption, "Untitled - Notepad");
}

#[test]
fn process_without_threads_or_windows_yields_nothing() {
    let desktop = MockDesktop::new();
    assert!(handles(&desktop, &process(1, &[]), EnumerateOptions::default()).is_empty());
    assert!(handles(&desktop, &process(1, &[5, 6]), EnumerateOptions::default()).is_empty());
}

#[test]
fn child_windows_kept_unless_skipped() {
    let desktop = MockDesktop::new()
        .with_window(1, 0x10, WS_VISIBLE | WS_CHILD, 0, "child")
        .with_window(1, 0x11, WS_VISIBLE, 0, "top");
    let p = process(100, &[1]);

    assert_eq!(
        handles(&desktop, &p, EnumerateOptions::default()),
        vec![0x10, 0x11]
    );
    assert_eq!(
        handles(
            &desktop,
            &p,
            EnumerateOptions {
                skip_child_windows: true
            }
        ),
        vec![0x11]
    );
}

#[test]
fn main_window_is_first_visible_unowned() {
    let desktop = MockDesktop::new()
        .with_window(1, 0x10, 0, 0, "invisible")
        .with_owned_window(1, 0x11, WS_VISIBLE, 0, "dialog")
        .with_window(2, 0x20, WS_VISIBLE, 0, "main")
        .with_window(2, 0x21, WS_VISIBLE, 0, "second");
    let p = process(100, &[1, 2]);

    let main = main_window(&desktop, &p, EnumerateOptions::default()).unwrap();
    assert_eq!(main.handle, WindowHandle(0x20));
    assert_eq!(main.caption, "main");
}

#[test]
fn main_window_absent_when_nothing_visible() {
    let desktop = MockDesktop::new().with_window(1, 0x10, 0, 0, "");
    assert!(main_window(&desktop, &process(1, &[1]), EnumerateOptions::default()).is_none());
}

// === Resolver ===

#[test]
fn resolver_matches_case_insensitively_in_os_order() {
    let desktop = MockDesktop::new()
        .with_process(10, "notepad.exe", &[1])
        .with_process(11, "explorer.exe", &[2])
        .with_process(12, "NOTEPAD.EXE", &[3]);

    let found = resolve(&desktop, "Notepad").unwrap();
    let pids: Vec<u32> = found.iter().map(|p| p.pid).collect();
    assert_eq!(pids, vec![10, 12]);
}

#[test]
fn resolver_reports_not_found_with_name() {
    let desktop = MockDesktop::new().with_process(10, "explorer.exe", &[1]);

    match resolve(&desktop, "WindowsTerminal") {
        Err(ToggleError::ProcessNotFound { name }) => assert_eq!(name, "WindowsTerminal"),
        other => panic!("expected ProcessNotFound, got {other:?}"),
    }
}
