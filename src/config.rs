use crate::error::{RecipeLensError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// 環境変数でエンドポイントを上書きする
pub const ENDPOINT_ENV: &str = "RECIPE_LENS_ENDPOINT";

const DEFAULT_TIMEOUT_SECONDS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 解析用に読み込む
    ///
    /// エンドポイントを引数で指定したときは、壊れた設定ファイルを無視して既定値で続行する。
    pub fn load_for_analyze(cli_endpoint: Option<&str>) -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(err) if cli_endpoint.is_some() => {
                warn!("設定ファイルの場所を決められないため既定値を使います: {}", err);
                return Ok(Self::default());
            }
            Err(err) => return Err(err),
        };
        Self::load_for_analyze_from(&path, cli_endpoint)
    }

    pub fn load_for_analyze_from(path: &Path, cli_endpoint: Option<&str>) -> Result<Self> {
        match Self::load_from(path) {
            Ok(config) => Ok(config),
            Err(err) if cli_endpoint.is_some() => {
                warn!(path = %path.display(), "設定ファイルを無視して既定値を使います: {}", err);
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecipeLensError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("recipe-lens").join("config.json"))
    }

    /// 解析エンドポイントを決める（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_endpoint(&self, cli_endpoint: Option<&str>) -> Result<String> {
        let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
        pick_endpoint(cli_endpoint, env_endpoint.as_deref(), self.endpoint.as_deref())
            .ok_or(RecipeLensError::MissingEndpoint)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        let endpoint = endpoint.trim().to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(RecipeLensError::Config(format!(
                "エンドポイントは http:// または https:// で始めてください: {}",
                endpoint
            )));
        }
        self.endpoint = Some(endpoint);
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(RecipeLensError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }
}

fn pick_endpoint(cli: Option<&str>, env: Option<&str>, file: Option<&str>) -> Option<String> {
    [cli, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
