//! Motominder - Motorcycle Registry
//!
//! バイク登録リクエストを読み込み、ユースケースを通して登録・一覧表示する

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use motominder::adapter::config::Config;
use motominder::driver::{Args, MotorcycleWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = MotorcycleWorkflow::new(config);

    workflow.execute(&args).await?;

    Ok(())
}
