//! CLI domain: parse, route, output, and presentation only.
//! No scanning logic; the route hands off to the manifest builder.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::format_build_summary;
pub use route::{apply_cli_overrides, RunContext, RunOutcome};
