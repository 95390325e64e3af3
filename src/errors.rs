use std::path::PathBuf;

use crate::model::WindowHandle;

/// Every failure the tool reports. None of them change the exit status.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error("Did not find any processes named '{name}', is it running?")]
    ProcessNotFound { name: String },

    #[error("Failed to list running processes (error {code:#010x})")]
    ProcessListFailed { code: u32 },

    #[error("{operation} failed for window {handle} (error {code:#010x})")]
    OsCallFailed {
        operation: &'static str,
        handle: WindowHandle,
        code: u32,
    },

    #[error("Taskbar list is unavailable (error {code:#010x})")]
    TaskbarUnavailable { code: u32 },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ToggleError {
    /// Error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ToggleError::ProcessNotFound { .. } => "PROCESS_NOT_FOUND",
            ToggleError::ProcessListFailed { .. } => "PROCESS_LIST_FAILED",
            ToggleError::OsCallFailed { .. } => "OS_CALL_FAILED",
            ToggleError::TaskbarUnavailable { .. } => "TASKBAR_UNAVAILABLE",
            ToggleError::ConfigRead { .. } => "CONFIG_READ_FAILED",
            ToggleError::ConfigParse { .. } => "CONFIG_PARSE_FAILED",
        }
    }

    /// Whether this error was caused by operator input rather than the OS
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ToggleError::ProcessNotFound { .. } | ToggleError::ConfigParse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_not_found_carries_name() {
        let err = ToggleError::ProcessNotFound {
            name: "Notepad".to_string(),
        };
        assert_eq!(err.error_code(), "PROCESS_NOT_FOUND");
        assert!(err.is_user_error());
        assert!(err.to_string().contains("'Notepad'"));
    }

    #[test]
    fn os_call_failure_shows_handle_and_code() {
        let err = ToggleError::OsCallFailed {
            operation: "SetWindowLong",
            handle: WindowHandle(0x42),
            code: 5,
        };
        assert_eq!(err.error_code(), "OS_CALL_FAILED");
        assert!(!err.is_user_error());
        assert_eq!(
            err.to_string(),
            "SetWindowLong failed for window 0x00000042 (error 0x00000005)"
        );
    }

    #[test]
    fn config_errors_split_by_origin() {
        let parse = ToggleError::ConfigParse {
            path: PathBuf::from("config.json"),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        let read = ToggleError::ConfigRead {
            path: PathBuf::from("config.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(parse.is_user_error());
        assert!(!read.is_user_error());
        assert!(!ToggleError::ProcessListFailed { code: 5 }.is_user_error());
    }
}
