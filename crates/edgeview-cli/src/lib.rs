// NOTE: edgeview Architecture
//
// One invocation = one bulk read of the edge store, then pure transforms:
//
//   store (index) -> namespace filter (engine) -> renderer (presentation)
//                                                  |- table: distribute -> summarize pods
//                                                  `- json/yaml: raw records in a v1 List
//
// Configuration is resolved once from the command line into GetConfig and
// passed down explicitly. Only main decides the exit status.

mod args;
mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod presentation;
pub mod telemetry;
pub mod types;

pub use args::{Cli, Commands, GetArgs};
pub use commands::run;
pub use config::GetConfig;
pub use error::{Error, Result};
