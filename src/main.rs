use anyhow::Context;
use clap::Parser;
use muhurat_view::core::GenerationOutcome;
use muhurat_view::utils::{logger, validation::Validate};
use muhurat_view::{AppConfig, CliConfig, HtmlDocumentView, HttpMuhuratApi, MuhuratController};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting muhurat-view");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AppConfig::resolve(&cli).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let form = config.form.clone();
    let output_path = config.output_path.clone();
    let controller = MuhuratController::new(HttpMuhuratApi::new(config), HtmlDocumentView::new());

    let outcome = controller.generate_muhurat(&form).await;
    let document = controller.view().to_document();

    match &output_path {
        Some(path) => {
            tokio::fs::write(path, document)
                .await
                .with_context(|| format!("failed to write page to {}", path))?;
            tracing::info!("📁 Page saved to: {}", path);
        }
        None => print!("{}", document),
    }

    // 根據結果決定退出碼
    let exit_code = match outcome {
        GenerationOutcome::Rendered { windows } => {
            tracing::info!("✅ Rendered {} muhurat windows", windows);
            0
        }
        GenerationOutcome::Warned => {
            eprintln!("⚠️ Both --start-date and --end-date are required");
            2
        }
        GenerationOutcome::Failed(kind) => {
            eprintln!("❌ Muhurat request failed ({})", kind);
            1
        }
        GenerationOutcome::Superseded => 1,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
