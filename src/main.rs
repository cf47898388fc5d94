use clap::Parser;
use paysdk::utils::{logger, validation::Validate};
use paysdk::{ApiClient, CliCommand, CliConfig, HydratorRegistry, ModelKind, Record, SdkConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting paysdk CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match config.command {
        CliCommand::Hydrate {
            model,
            input,
            validate,
        } => {
            let kind: ModelKind = model.parse()?;
            let content = std::fs::read_to_string(&input)?;
            let record = Record::from_json_str(&content)?;

            let hydrated = HydratorRegistry::default().hydrate(kind.name(), &record)?;
            if validate {
                if let Err(e) = hydrated.validate() {
                    tracing::error!("❌ Validation failed: {}", e);
                    eprintln!("❌ {}", e);
                    std::process::exit(2);
                }
            }

            println!("{}", serde_json::to_string_pretty(&hydrated)?);
        }
        CliCommand::FetchTransaction { config, id } => {
            let sdk_config = SdkConfig::from_file(&config)?;
            if let Err(e) = sdk_config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }

            let client = ApiClient::from_config(sdk_config)?;
            let transaction = client.get_transaction(&id).await?;
            println!("{}", serde_json::to_string_pretty(&transaction)?);
        }
    }

    Ok(())
}
