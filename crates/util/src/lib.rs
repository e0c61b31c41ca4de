//! Small helpers shared by every crate in the workspace.

pub mod debug_log;
pub mod report;
