use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::config::Config;
use crate::core::{EnumerateOptions, Invocation};
use crate::model::{StrategyKind, Visibility, WindowScope};

pub fn build_cli() -> Command {
    Command::new("taskbar-toggle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show or hide the taskbar entries of a running process's windows")
        .long_about("Finds every running process with the given name and toggles whether its windows appear in the taskbar, either by rewriting the TOOLWINDOW/APPWINDOW extended style bits or by adding/removing the window's tab through the shell taskbar list.")
        .arg(
            Arg::new("process")
                .help("Process name, case-insensitive, '.exe' optional (e.g. WindowsTerminal)")
                .index(1)
        )
        .arg(
            Arg::new("state")
                .help("'show' to add to the taskbar, anything else hides")
                .index(2)
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .short('s')
                .help("Mechanism used to toggle taskbar presence (overrides config)")
                .value_parser(["style", "taskbar"])
        )
        .arg(
            Arg::new("scope")
                .long("scope")
                .help("Apply to the main window only or to all visible windows (overrides config)")
                .value_parser(["main", "all"])
        )
        .arg(
            Arg::new("skip-child-windows")
                .long("skip-child-windows")
                .help("Ignore windows that carry the WS_CHILD style bit")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a JSON config file (default: %APPDATA%/TaskbarToggle/config.json)")
                .value_parser(value_parser!(PathBuf))
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug details to stderr")
                .action(ArgAction::SetTrue)
        )
}

pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}

/// Build the run request from parsed arguments, layering flags over `config`.
///
/// Returns `None` when either positional argument is missing; the caller
/// prints usage and exits successfully.
pub fn parse_invocation(matches: &ArgMatches, config: &Config) -> Option<Invocation> {
    let process_name = matches.get_one::<String>("process")?;
    let state = matches.get_one::<String>("state")?;

    let strategy = matches
        .get_one::<String>("strategy")
        .and_then(|s| s.parse::<StrategyKind>().ok())
        .unwrap_or(config.strategy);

    let scope = config.scope_for(
        strategy,
        matches
            .get_one::<String>("scope")
            .and_then(|s| s.parse::<WindowScope>().ok()),
    );

    Some(Invocation {
        process_name: process_name.clone(),
        visibility: Visibility::from_token(state),
        strategy,
        scope,
        options: EnumerateOptions {
            skip_child_windows: matches.get_flag("skip-child-windows")
                || config.skip_child_windows,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(args: &[&str], config: &Config) -> Option<Invocation> {
        let matches = build_cli().try_get_matches_from(args).unwrap();
        parse_invocation(&matches, config)
    }

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "taskbar-toggle");
    }

    #[test]
    fn test_cli_missing_positionals_gives_no_invocation() {
        let config = Config::default();
        assert!(invocation(&["taskbar-toggle"], &config).is_none());
        assert!(invocation(&["taskbar-toggle", "notepad"], &config).is_none());
    }

    #[test]
    fn test_cli_defaults_follow_config() {
        let inv = invocation(&["taskbar-toggle", "notepad", "show"], &Config::default()).unwrap();
        assert_eq!(inv.process_name, "notepad");
        assert_eq!(inv.visibility, Visibility::Show);
        assert_eq!(inv.strategy, StrategyKind::Taskbar);
        assert_eq!(inv.scope, WindowScope::AllVisible);
        assert!(!inv.options.skip_child_windows);
    }

    #[test]
    fn test_cli_non_show_state_hides() {
        let inv = invocation(&["taskbar-toggle", "notepad", "off"], &Config::default()).unwrap();
        assert_eq!(inv.visibility, Visibility::Hide);
    }

    #[test]
    fn test_cli_style_strategy_defaults_to_main_window() {
        let inv = invocation(
            &["taskbar-toggle", "WindowsTerminal", "SHOW", "--strategy", "style"],
            &Config::default(),
        )
        .unwrap();
        assert_eq!(inv.visibility, Visibility::Show);
        assert_eq!(inv.strategy, StrategyKind::StyleFlag);
        assert_eq!(inv.scope, WindowScope::MainWindow);
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config = Config {
            strategy: StrategyKind::StyleFlag,
            scope: Some(WindowScope::MainWindow),
            skip_child_windows: false,
        };
        let inv = invocation(
            &[
                "taskbar-toggle",
                "notepad",
                "hide",
                "-s",
                "taskbar",
                "--scope",
                "all",
                "--skip-child-windows",
            ],
            &config,
        )
        .unwrap();
        assert_eq!(inv.strategy, StrategyKind::Taskbar);
        assert_eq!(inv.scope, WindowScope::AllVisible);
        assert!(inv.options.skip_child_windows);
    }

    #[test]
    fn test_cli_config_scope_used_without_flag() {
        let config = Config {
            strategy: StrategyKind::Taskbar,
            scope: Some(WindowScope::MainWindow),
            skip_child_windows: true,
        };
        let inv = invocation(&["taskbar-toggle", "notepad", "show"], &config).unwrap();
        assert_eq!(inv.scope, WindowScope::MainWindow);
        assert!(inv.options.skip_child_windows);
    }

    #[test]
    fn test_cli_invalid_strategy() {
        let matches = build_cli().try_get_matches_from(vec![
            "taskbar-toggle",
            "notepad",
            "show",
            "--strategy",
            "invalid",
        ]);
        assert!(matches.is_err());
    }
}
