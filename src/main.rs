use clap::Parser;
use favicon_gen::utils::{logger, validation::Validate};
use favicon_gen::{CliConfig, FaviconPipeline, GeneratorEngine, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting favicon-gen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置，任何錯誤都在寫出檔案之前結束
    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(".");
    let pipeline = FaviconPipeline::new(storage, settings);
    let engine = GeneratorEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!("✨ All favicons generated successfully!");
            println!(
                "✨ Generated {} files in {}",
                summary.files_written.len(),
                summary.output_dir
            );
            if let Some((name, size)) = summary.largest_raster {
                println!("📸 Largest PNG: {} ({}x{})", name, size, size);
            }
        }
        Err(e) => {
            tracing::error!("❌ Error generating favicons: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
