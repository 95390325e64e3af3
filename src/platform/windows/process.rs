//! Process listing through a toolhelp snapshot.
//!
//! One snapshot covers both processes and threads, so each process's thread
//! list is consistent with the process list.

use std::collections::HashMap;

use tracing::debug;
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, Process32FirstW, Process32NextW, Thread32First, Thread32Next,
    PROCESSENTRY32W, TH32CS_SNAPPROCESS, TH32CS_SNAPTHREAD, THREADENTRY32,
};

use super::{error_code, NativeDesktop};
use crate::core::ProcessApi;
use crate::errors::ToggleError;
use crate::model::ProcessInfo;

/// Closes the snapshot handle on drop.
struct Snapshot(HANDLE);

impl Drop for Snapshot {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..len])
}

fn list_threads(snapshot: &Snapshot) -> HashMap<u32, Vec<u32>> {
    let mut threads: HashMap<u32, Vec<u32>> = HashMap::new();
    let mut entry = THREADENTRY32 {
        dwSize: std::mem::size_of::<THREADENTRY32>() as u32,
        ..Default::default()
    };

    unsafe {
        if Thread32First(snapshot.0, &mut entry).is_err() {
            return threads;
        }
        loop {
            threads
                .entry(entry.th32OwnerProcessID)
                .or_default()
                .push(entry.th32ThreadID);
            if Thread32Next(snapshot.0, &mut entry).is_err() {
                break;
            }
        }
    }
    threads
}

impl ProcessApi for NativeDesktop {
    fn list_processes(&self) -> Result<Vec<ProcessInfo>, ToggleError> {
        let snapshot = unsafe {
            CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS | TH32CS_SNAPTHREAD, 0).map_err(|e| {
                ToggleError::ProcessListFailed {
                    code: error_code(&e),
                }
            })?
        };
        let snapshot = Snapshot(snapshot);

        let mut threads = list_threads(&snapshot);
        let mut processes = Vec::new();
        let mut entry = PROCESSENTRY32W {
            dwSize: std::mem::size_of::<PROCESSENTRY32W>() as u32,
            ..Default::default()
        };

        unsafe {
            Process32FirstW(snapshot.0, &mut entry).map_err(|e| ToggleError::ProcessListFailed {
                code: error_code(&e),
            })?;
            loop {
                let pid = entry.th32ProcessID;
                processes.push(ProcessInfo {
                    pid,
                    name: wide_to_string(&entry.szExeFile),
                    thread_ids: threads.remove(&pid).unwrap_or_default(),
                });
                if Process32NextW(snapshot.0, &mut entry).is_err() {
                    break;
                }
            }
        }

        debug!(event = "platform.processes_listed", count = processes.len());
        Ok(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_to_string_stops_at_nul() {
        let mut buf = [0u16; 16];
        for (i, c) in "notepad.exe".encode_utf16().enumerate() {
            buf[i] = c;
        }
        assert_eq!(wide_to_string(&buf), "notepad.exe");
    }

    #[test]
    fn current_process_is_listed_with_threads() {
        let processes = NativeDesktop::new().list_processes().unwrap();
        let me = std::process::id();
        let found = processes.iter().find(|p| p.pid == me).unwrap();
        assert!(!found.thread_ids.is_empty());
    }
}
