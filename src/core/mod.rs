//! Platform-neutral core: enumeration, strategies, resolver and driver.
//!
//! Nothing in here links against Win32. The OS is reached only through the
//! traits in [`capability`].

pub mod capability;
pub mod driver;
pub mod enumerator;
pub mod resolver;
pub mod strategy;

pub use capability::{ProcessApi, TaskbarApi, WindowApi};
pub use driver::{Driver, Invocation, RunOutcome, RunSummary};
pub use enumerator::{main_window, visible_windows, EnumerateOptions};
pub use resolver::resolve;
pub use strategy::{
    hide_style, next_ex_style, show_style, Applied, StyleFlagStrategy, TaskbarStrategy,
    VisibilityStrategy,
};
