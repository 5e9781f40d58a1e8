use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-lens")]
#[command(about = "食材の写真を解析してレシピ候補を表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を解析エンドポイントへ送信して結果を表示
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 解析エンドポイント（例: http://localhost:8080/analyze）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// レスポンスをJSONのまま出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 解析エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from([
            "recipe-lens",
            "analyze",
            "photo.jpg",
            "--endpoint",
            "http://localhost:8080/analyze",
            "--json",
            "-v",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { image, endpoint, json } => {
                assert_eq!(image, PathBuf::from("photo.jpg"));
                assert_eq!(endpoint.as_deref(), Some("http://localhost:8080/analyze"));
                assert!(json);
            }
            _ => panic!("analyze として解析されていない"),
        }
    }

    #[test]
    fn test_analyze_requires_image() {
        assert!(Cli::try_parse_from(["recipe-lens", "analyze"]).is_err());
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::parse_from(["recipe-lens", "config", "--set-timeout", "30", "--show"]);
        match cli.command {
            Commands::Config { set_endpoint, set_timeout, show } => {
                assert!(set_endpoint.is_none());
                assert_eq!(set_timeout, Some(30));
                assert!(show);
            }
            _ => panic!("config として解析されていない"),
        }
    }
}
