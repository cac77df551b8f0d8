//! FunPark CLI library.
//!
//! Rendering helpers shared by the `funpark-cli` subcommands. The binary does
//! argument parsing and dispatch; everything that turns library results into
//! text or JSON lives here so it can be tested without spawning a process.

pub mod output;
