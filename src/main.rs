//! Worksum - Daily Work Report Pipeline
//!
//! 作業ログを要約して日次レポートをメール送信する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use worksum::adapter::config::{Config, Secrets};
use worksum::driver::{Args, DailyReportWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration and environment secrets
    let config = Config::load(&args.config)?;
    let secrets = Secrets::from_env();

    // Assemble production adapters (validates required secrets up front)
    let workflow = DailyReportWorkflow::assemble(config, &secrets, &args).await?;

    workflow.execute(args.report_date()).await
}
