use anyhow::Context;
use serde::Deserialize;

use crate::infrastructure::kafka::KafkaConfig;

/// Config はアプリケーション全体の設定。
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub kafka: KafkaConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// AppConfig はアプリケーション設定。
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_environment() -> String {
    "dev".to_string()
}

/// ServerConfig はサーバー設定。
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// ObservabilityConfig はログ出力の設定。
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// RUST_LOG が未設定のときに使うログレベル
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// "json" または "text"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    /// 設定ファイルを読み込み、環境変数による上書きを適用する。
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {path}"))?;
        let cfg = Self::from_yaml(&content)
            .with_context(|| format!("failed to parse config file: {path}"))?;
        Ok(cfg.with_brokers_override(std::env::var("KAFKA_BROKERS").ok()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// カンマ区切りのブローカーリストで kafka.brokers を上書きする。
    /// 空文字列や空要素のみの場合は何もしない。
    pub fn with_brokers_override(mut self, brokers: Option<String>) -> Self {
        if let Some(raw) = brokers {
            let parsed: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(ToString::to_string)
                .collect();
            if !parsed.is_empty() {
                self.kafka.brokers = parsed;
            }
        }
        self
    }
}
