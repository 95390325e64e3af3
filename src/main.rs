#[cfg(target_os = "windows")]
mod windows_main;

use std::path::PathBuf;
use std::process::ExitCode;

use taskbar_toggle::{build_cli, get_matches, init_logging, load_config, parse_invocation};

fn main() -> ExitCode {
    let matches = get_matches();
    init_logging(matches.get_flag("verbose"));

    let config = load_config(matches.get_one::<PathBuf>("config").map(PathBuf::as_path));

    let Some(invocation) = parse_invocation(&matches, &config) else {
        // Missing arguments are not an error: show usage and leave.
        let _ = build_cli().print_help();
        println!();
        return ExitCode::SUCCESS;
    };

    run(&invocation)
}

#[cfg(target_os = "windows")]
fn run(invocation: &taskbar_toggle::core::Invocation) -> ExitCode {
    windows_main::run(invocation);
    ExitCode::SUCCESS
}

#[cfg(not(target_os = "windows"))]
fn run(_invocation: &taskbar_toggle::core::Invocation) -> ExitCode {
    eprintln!("taskbar-toggle only supports Windows");
    ExitCode::FAILURE
}
