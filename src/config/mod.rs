pub mod toml_config;

pub use toml_config::SdkConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "paysdk")]
#[command(about = "Hydrate payment API responses into typed models")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: CliCommand,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// 把 JSON 檔案轉換成指定模型並輸出
    Hydrate {
        #[arg(long, help = "Model name, e.g. Transaction or Customer")]
        model: String,

        #[arg(long, help = "Path to a JSON response body")]
        input: PathBuf,

        #[arg(long, help = "Check required fields after hydration")]
        validate: bool,
    },

    /// 從 API 讀取一筆交易
    FetchTransaction {
        #[arg(long, default_value = "paysdk.toml")]
        config: PathBuf,

        #[arg(long)]
        id: String,
    },
}
