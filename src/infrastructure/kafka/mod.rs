pub mod consumer;
pub mod producer;

use serde::Deserialize;

/// KafkaConfig は Kafka 接続とトピックの設定を表す。
#[derive(Debug, Clone, Deserialize)]
pub struct KafkaConfig {
    pub brokers: Vec<String>,
    #[serde(default = "default_security_protocol")]
    pub security_protocol: String,
    /// HTTP から受け付けたメッセージの発行先
    #[serde(default = "default_topic")]
    pub producer_topic: String,
    /// 購読するトピック（1 つのみ）
    #[serde(default = "default_topic")]
    pub consumer_topic: String,
    #[serde(default = "default_consumer_group")]
    pub consumer_group: String,
    #[serde(default = "default_auto_offset_reset")]
    pub auto_offset_reset: String,
    /// 発行時の配信待ちタイムアウト（ミリ秒）
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,
}

fn default_security_protocol() -> String {
    "PLAINTEXT".to_string()
}

fn default_topic() -> String {
    "test_topic".to_string()
}

fn default_consumer_group() -> String {
    "testgroup".to_string()
}

fn default_auto_offset_reset() -> String {
    "latest".to_string()
}

fn default_message_timeout_ms() -> u64 {
    5000
}

impl KafkaConfig {
    /// ブローカーアドレスをカンマ区切り文字列で返す（rdkafka 用）。
    pub fn brokers_string(&self) -> String {
        self.brokers.join(",")
    }
}
