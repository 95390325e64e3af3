//! Toggle the taskbar presence of a running process's windows.
//!
//! The core (window enumeration, style policy, process resolution and the
//! command driver) is pure Rust and talks to the OS only through the traits
//! in [`crate::core::capability`], so it can be tested as normal integration tests
//! against [`platform::mock::MockDesktop`].

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod model;
pub mod platform;

// Re-export the pieces the binary needs
pub use cli::{build_cli, get_matches, parse_invocation};
pub use config::{load_config, Config};
pub use errors::ToggleError;
pub use logging::init_logging;
pub use model::{StrategyKind, Visibility, WindowScope};
