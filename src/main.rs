//! EPL Data Lake - Setup Tool
//!
//! Premier League の順位表を S3 に置き、Glue と Athena から参照できるようにする

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use epl_datalake::driver::{self, Args};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    driver::run(args).await
}
