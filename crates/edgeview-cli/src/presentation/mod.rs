//! # Presentation Layer
//!
//! Turns the filtered record list into the bytes written to stdout.
//!
//! ```text
//! [ Handler ] --> [ OutputFormat::renderer() ] --> TableRenderer ==(tabwriter)==> Output
//!                                               |-> JsonRenderer  ==(serde_json)==> Output
//!                                               `-> YamlRenderer  ==(serde_yaml)==> Output
//! ```
//!
//! The table shows pod summaries only. JSON and YAML show every filtered
//! record, raw, wrapped in a `v1` `List`. JSON and YAML documents are built
//! in full before the first byte is written.

pub mod renderers;

pub use renderers::{JsonRenderer, Renderer, TableRenderer, YamlRenderer};
