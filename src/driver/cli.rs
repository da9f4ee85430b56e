//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// バイク登録リクエストを処理するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "motominder")]
#[command(about = "Insert motorcycles into an in-memory registry and list them", long_about = None)]
pub struct Args {
    /// Dry run mode - validate requests without inserting them
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path
    #[arg(short, long, default_value = "./.motominder/config.json")]
    pub config: String,

    /// JSON file containing an array of motorcycles to insert
    #[arg(short, long, default_value = "./.motominder/motorcycles.json")]
    pub requests: String,
}
