use crate::config::{DB_PATH_ENV, DEFAULT_DB_PATH};
use crate::types::OutputFormat;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        about = "Get and format resources of an available type from the edge node's local store"
    )]
    Get(GetArgs),
}

#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Resource type: all, pod, node, service, secret, configmap or endpoint
    #[arg(value_name = "TYPE")]
    pub types: Vec<String>,

    /// Path to the edge node database
    #[arg(short = 'i', long, env = DB_PATH_ENV, default_value = DEFAULT_DB_PATH)]
    pub input: String,

    /// Output format: json, yaml, or empty for a table
    #[arg(short = 'o', long, default_value = "")]
    pub output: OutputFormat,

    /// List the requested object(s) in this namespace
    #[arg(short = 'n', long, default_value = "default")]
    pub namespace: String,

    /// List the requested object(s) across all namespaces
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,
}
