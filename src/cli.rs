//! CLI domain: parse, route, and output only.
//! No domain orchestration; the route table dispatches to snapshot operations.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, SnapshotArgs};
pub use route::RunContext;
