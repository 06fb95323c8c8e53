//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// Premier League のデータレイクを構築するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "epl-datalake")]
#[command(about = "Set up an S3/Glue/Athena data lake for Premier League standings", long_about = None)]
pub struct Args {
    /// Fetch and convert standings without calling AWS
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path (JSON); built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// .env file to load before reading the environment
    #[arg(long, default_value = ".env")]
    pub env_file: String,
}
