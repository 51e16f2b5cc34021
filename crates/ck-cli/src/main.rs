/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands;
mod store;

use commands::DumpDataset;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "ck")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Directory holding catalog.json and state.json
  #[arg(long, global = true, default_value = "./data")]
  data_dir: PathBuf,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Seed the local catalog from a bundled snapshot, once per schema version
  Bootstrap {
    /// Directory with coins.json/blockchains.json/tokens.json; built-in
    /// snapshots are used when omitted
    #[arg(long)]
    bundle_dir: Option<PathBuf>,
  },
  /// Reconcile the local catalog against the remote service
  Sync,
  /// Print a stored dataset as JSON
  Dump {
    #[arg(value_enum)]
    dataset: DumpDataset,
  },
  /// Print stored sync state
  Info,
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).init();

  // Execute command
  match cli.command {
    Commands::Bootstrap { bundle_dir } => commands::bootstrap(cli.data_dir, bundle_dir).await?,
    Commands::Sync => {
      let config = ck_core::Config::from_env()?;
      commands::sync(cli.data_dir, config).await?
    }
    Commands::Dump { dataset } => commands::dump(cli.data_dir, dataset).await?,
    Commands::Info => commands::info(cli.data_dir).await?,
  }

  Ok(())
}
