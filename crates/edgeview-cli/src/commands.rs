use super::args::{Cli, Commands};
use super::handlers;
use crate::Result;
use crate::config::GetConfig;
use edgeview_index::Database;
use std::io::{self, Write};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Get(args) => {
            let config = GetConfig::from_args(&args);
            let stdout = io::stdout();
            let mut out = stdout.lock();

            handlers::get::handle(&args.types, &config, Database::open, &mut out)?;
            out.flush()?;
            Ok(())
        }
    }
}
