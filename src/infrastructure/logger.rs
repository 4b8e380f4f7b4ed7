//! 構造化ログの初期化。
//! RUST_LOG が設定されていればそれを優先し、なければ設定ファイルのログレベルを使う。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::config::ObservabilityConfig;

/// init_logger は tracing-subscriber を初期化する。
/// format が "text" の場合はプレーンテキスト出力、それ以外は JSON 出力。
pub fn init_logger(cfg: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cfg.log_format == "text" {
        registry.with(fmt::layer().with_target(true)).init();
    } else {
        registry.with(fmt::layer().json().with_target(true)).init();
    }
}
