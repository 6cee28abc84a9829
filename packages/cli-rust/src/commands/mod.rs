//! CLI command implementations
//!
//! Each command receives the resolved configuration and returns errors for
//! `main` to display. `update` and `add` also take the global quiet flag.

mod add;
mod config;
mod list;
mod update;

pub use add::{AddArgs, cmd_add};
pub use config::{ConfigArgs, cmd_config};
pub use list::{ListArgs, cmd_list};
pub use update::{UpdateArgs, cmd_update};
