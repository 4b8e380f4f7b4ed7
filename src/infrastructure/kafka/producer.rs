use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};

use super::KafkaConfig;

/// MessagePublisher はテキストメッセージをトピックへ発行するトレイト。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    /// payload をキー・ヘッダーなしでそのまま topic に発行する。
    async fn publish(&self, topic: &str, payload: &str) -> anyhow::Result<()>;
}

/// KafkaMessageProducer は rdkafka FutureProducer を使った Kafka プロデューサー。
pub struct KafkaMessageProducer {
    producer: FutureProducer,
    timeout: Duration,
}

impl KafkaMessageProducer {
    /// 新しい KafkaMessageProducer を作成する。
    /// ブローカーへの接続は最初の送信時に行われる。
    pub fn new(config: &KafkaConfig) -> anyhow::Result<Self> {
        let mut client_config = ClientConfig::new();
        client_config.set("bootstrap.servers", config.brokers_string());
        client_config.set("security.protocol", &config.security_protocol);
        client_config.set("message.timeout.ms", config.message_timeout_ms.to_string());

        let producer: FutureProducer = client_config.create()?;

        Ok(Self {
            producer,
            timeout: Duration::from_millis(config.message_timeout_ms),
        })
    }
}

#[async_trait]
impl MessagePublisher for KafkaMessageProducer {
    async fn publish(&self, topic: &str, payload: &str) -> anyhow::Result<()> {
        let record: FutureRecord<'_, (), str> = FutureRecord::to(topic).payload(payload);

        let (partition, offset) = self
            .producer
            .send(record, self.timeout)
            .await
            .map_err(|(err, _)| anyhow::anyhow!("failed to publish to topic {}: {}", topic, err))?;

        tracing::debug!(
            topic = %topic,
            partition,
            offset,
            "message delivered"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> KafkaConfig {
        serde_yaml::from_str(r#"brokers: ["localhost:9092"]"#).unwrap()
    }

    #[test]
    fn test_producer_creation_does_not_require_broker() {
        let mut config = test_config();
        config.message_timeout_ms = 1500;
        let producer = KafkaMessageProducer::new(&config).unwrap();
        assert_eq!(producer.timeout, Duration::from_millis(1500));
    }
}
