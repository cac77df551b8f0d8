// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments,
// loads the park and dispatches to these handlers.

pub mod attractions;
pub mod recommend;
pub mod route;
pub mod toggle;
pub mod traverse;
