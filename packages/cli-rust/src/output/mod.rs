//! Output utilities for CLI commands
//!
//! Terminal formatting shared by the commands: host listing lines and
//! centralized error display with hints for the common failures.

pub mod errors;
pub mod hosts;

pub use errors::{error_hint, show_error};
pub use hosts::host_line;
