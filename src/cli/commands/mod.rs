pub mod analyze;
pub mod clean;
mod command_result;
pub mod context;
pub mod files;
pub mod graph;
pub mod init;
pub mod report;

pub use command_result::*;
