use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use dart_utils::id_generator::{md5_hash, md5_hash_files, md5_hash_reader};

#[derive(Parser, Debug)]
#[clap(version, about)]
/// Prints MD5 content identifiers as 32 lowercase hex characters
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Prints "<id>  <path>" for every file in <PATHS>
    File {
        #[clap(required = true)]
        /// The files to identify
        paths: Vec<PathBuf>,
    },
    /// Prints the id of everything read from standard input
    Stdin,
    /// Prints the id of the UTF-8 bytes of <TEXT>
    Text {
        /// The text to identify
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli: Cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    return match cli.command {
        Commands::File { paths } => {
            let mut failed = 0;
            for (path, result) in md5_hash_files(&paths) {
                match result {
                    Ok(id) => writeln!(out, "{}  {}", id, path.display())?,
                    Err(e) => {
                        error!("{}", e);
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                bail!("{} of {} files could not be hashed", failed, paths.len());
            }
            Ok(())
        }
        Commands::Stdin => {
            info!("Hashing standard input");
            let id = md5_hash_reader(io::stdin().lock()).context("hashing standard input")?;
            writeln!(out, "{}", id)?;
            Ok(())
        }
        Commands::Text { text } => {
            writeln!(out, "{}", md5_hash(text.as_bytes()))?;
            Ok(())
        }
    };
}
