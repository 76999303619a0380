use clap::Parser;
use living_bridge::utils::{logger, validation::Validate};
use living_bridge::{BridgeDemo, CliConfig, StdoutConsole};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting living-bridge");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置並載入配對
    let pairings = match config.validate().and_then(|_| config.pairings()) {
        Ok(pairings) => pairings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let demo = BridgeDemo::with_pairings(StdoutConsole, pairings);

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will breathe");
        for pairing in demo.pairings() {
            tracing::info!("  {}", pairing);
        }
        return Ok(());
    }

    let count = demo.run();
    tracing::info!("✅ {} living things breathed", count);

    Ok(())
}
