//! Windows-specific entry point: wires the native bindings into the driver.

use std::io::{self, Write};

use tracing::error;

use taskbar_toggle::core::{Driver, Invocation, RunOutcome};
use taskbar_toggle::platform::windows::{NativeDesktop, NativeTaskbar};

/// Run one invocation against the live desktop.
pub fn run(invocation: &Invocation) {
    let desktop = NativeDesktop::new();
    // Dropped at the end of this function, releasing COM on every path.
    let taskbar = NativeTaskbar::new();
    let driver = Driver::new(&desktop, &desktop, &taskbar);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match driver.run(invocation, &mut out) {
        Ok(RunOutcome::Completed(summary)) if summary.failed > 0 => {
            let _ = writeln!(
                out,
                "{} of {} windows could not be updated",
                summary.failed, summary.windows
            );
        }
        Ok(_) => {}
        Err(e) => error!(event = "main.output_failed", error = %e),
    }
}
