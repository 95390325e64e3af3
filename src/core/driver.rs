//! Command driver: resolve the process, pick its windows, apply the strategy.
//!
//! Every failure is written to the status output and processing moves on to
//! the next window or process. Nothing here changes the exit status.

use std::io::{self, Write};

use tracing::{error, info, warn};

use super::capability::{ProcessApi, TaskbarApi, WindowApi};
use super::enumerator::{main_window, visible_windows, EnumerateOptions};
use super::resolver::resolve;
use super::strategy::{Applied, StyleFlagStrategy, TaskbarStrategy, VisibilityStrategy};
use crate::errors::ToggleError;
use crate::model::{ProcessInfo, StrategyKind, Visibility, WindowInfo, WindowScope};

/// Fully parsed request for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub process_name: String,
    pub visibility: Visibility,
    pub strategy: StrategyKind,
    pub scope: WindowScope,
    pub options: EnumerateOptions,
}

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processes: usize,
    pub windows: usize,
    pub applied: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No running process carried the requested name.
    NotFound { name: String },
    /// The strategy could not be prepared; no window was touched.
    Aborted { error_code: &'static str },
    Completed(RunSummary),
}

pub struct Driver<'a> {
    processes: &'a dyn ProcessApi,
    windows: &'a dyn WindowApi,
    taskbar: &'a dyn TaskbarApi,
}

impl<'a> Driver<'a> {
    pub fn new(
        processes: &'a dyn ProcessApi,
        windows: &'a dyn WindowApi,
        taskbar: &'a dyn TaskbarApi,
    ) -> Self {
        Self {
            processes,
            windows,
            taskbar,
        }
    }

    fn strategy(&self, kind: StrategyKind) -> Box<dyn VisibilityStrategy + 'a> {
        match kind {
            StrategyKind::StyleFlag => Box::new(StyleFlagStrategy::new(self.windows)),
            StrategyKind::Taskbar => Box::new(TaskbarStrategy::new(self.taskbar)),
        }
    }

    fn target_windows(&self, process: &ProcessInfo, invocation: &Invocation) -> Vec<WindowInfo> {
        match invocation.scope {
            WindowScope::MainWindow => main_window(self.windows, process, invocation.options)
                .into_iter()
                .collect(),
            WindowScope::AllVisible => {
                visible_windows(self.windows, process, invocation.options).collect()
            }
        }
    }

    /// Run one invocation, writing a status line per operation to `out`.
    pub fn run(&self, invocation: &Invocation, out: &mut dyn Write) -> io::Result<RunOutcome> {
        info!(
            event = "driver.run_started",
            process = %invocation.process_name,
            visibility = invocation.visibility.label(),
            strategy = invocation.strategy.as_str()
        );

        let processes = match resolve(self.processes, &invocation.process_name) {
            Ok(processes) => processes,
            Err(ToggleError::ProcessNotFound { name }) => {
                warn!(event = "driver.process_not_found", process = %name);
                writeln!(
                    out,
                    "{}",
                    ToggleError::ProcessNotFound { name: name.clone() }
                )?;
                return Ok(RunOutcome::NotFound { name });
            }
            Err(e) => {
                if e.is_user_error() {
                    warn!(event = "driver.resolve_failed", error = %e, code = e.error_code());
                } else {
                    error!(event = "driver.resolve_failed", error = %e, code = e.error_code());
                }
                writeln!(out, "{e}")?;
                return Ok(RunOutcome::Aborted {
                    error_code: e.error_code(),
                });
            }
        };

        let mut strategy = self.strategy(invocation.strategy);
        if let Err(e) = strategy.prepare() {
            if e.is_user_error() {
                warn!(event = "driver.prepare_failed", error = %e, code = e.error_code());
            } else {
                error!(event = "driver.prepare_failed", error = %e, code = e.error_code());
            }
            writeln!(out, "{e}")?;
            return Ok(RunOutcome::Aborted {
                error_code: e.error_code(),
            });
        }

        let mut summary = RunSummary::default();
        for process in &processes {
            summary.processes += 1;
            writeln!(
                out,
                "Setting taskbar visibility {} for process '{}' (pid {}) via {}",
                invocation.visibility.label(),
                process.name,
                process.pid,
                strategy.kind().as_str()
            )?;

            let windows = self.target_windows(process, invocation);
            if windows.is_empty() {
                info!(event = "driver.no_windows", pid = process.pid);
                writeln!(out, "  no visible windows")?;
                continue;
            }

            for window in &windows {
                summary.windows += 1;
                match strategy.apply(window, invocation.visibility) {
                    Ok(applied) => {
                        summary.applied += 1;
                        writeln!(out, "  {}", describe(window, applied))?;
                    }
                    Err(e) => {
                        summary.failed += 1;
                        warn!(
                            event = "driver.apply_failed",
                            pid = process.pid,
                            handle = %window.handle,
                            error = %e
                        );
                        writeln!(out, "  window {}: {e}", window.handle)?;
                    }
                }
            }
        }

        info!(
            event = "driver.run_completed",
            processes = summary.processes,
            windows = summary.windows,
            applied = summary.applied,
            failed = summary.failed
        );
        Ok(RunOutcome::Completed(summary))
    }
}

fn describe(window: &WindowInfo, applied: Applied) -> String {
    let target = if window.caption.is_empty() {
        format!("window {}", window.handle)
    } else {
        format!("window {} \"{}\"", window.handle, window.caption)
    };
    match applied {
        Applied::StyleRewritten { previous, current } => {
            format!("{target}: extended style {previous:08x} -> {current:08x}")
        }
        Applied::TabAdded => format!("{target}: taskbar tab added"),
        Applied::TabRemoved => format!("{target}: taskbar tab removed"),
    }
}
