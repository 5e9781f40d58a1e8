use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use recipe_lens::{cli, client, config, image_file, report};
use cli::{Cli, Commands};
use client::AnalyzeClient;
use config::Config;
use image_file::LocalImage;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze { image, endpoint, json } => {
            let config = Config::load_for_analyze(endpoint.as_deref())
                .context("設定ファイルの読み込みに失敗しました")?;
            let endpoint = config.resolve_endpoint(endpoint.as_deref())?;
            let image = LocalImage::load(&image)
                .with_context(|| format!("画像を読み込めません: {}", image.display()))?;
            let client = AnalyzeClient::new(endpoint, Duration::from_secs(config.timeout_seconds))?;

            let spinner = loading_spinner();
            match client::analyze(&client, &image, &spinner).await {
                Ok(analysis) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&analysis.response)?);
                    } else {
                        print!("{}", report::render_report(&analysis.view));
                    }
                }
                Err(err) => {
                    eprintln!("✖ {}", err.user_message());
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut config = Config::load().context("設定ファイルの読み込みに失敗しました")?;
            let changed = set_endpoint.is_some() || set_timeout.is_some();

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
            }
            if changed {
                config.save().context("設定ファイルの保存に失敗しました")?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint.as_deref().unwrap_or("未設定"));
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                if let Ok(path) = Config::config_path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("recipe_lens=debug,recipe_lens_common=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner
}
