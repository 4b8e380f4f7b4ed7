use std::sync::Arc;

use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::Message as _;
use tokio_util::sync::CancellationToken;

use crate::domain::entity::Message;
use crate::usecase::ConsumeMessageUseCase;

use super::KafkaConfig;

/// PayloadError は受信ペイロードをテキストとして扱えない理由。
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("message has no payload")]
    Missing,

    #[error("payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// 受信したペイロードを UTF-8 テキストとして取り出す。
pub fn decode_payload(payload: Option<&[u8]>) -> Result<&str, PayloadError> {
    let bytes = payload.ok_or(PayloadError::Missing)?;
    Ok(std::str::from_utf8(bytes)?)
}

/// 受信したペイロードを ConsumeMessageUseCase に渡す。
/// テキストとして扱えないペイロードは渡さずにエラーを返す。
pub fn dispatch_payload(
    use_case: &ConsumeMessageUseCase,
    payload: Option<&[u8]>,
) -> Result<(), PayloadError> {
    let text = decode_payload(payload)?;
    use_case.execute(&Message::new(text));
    Ok(())
}

/// KafkaMessageConsumer は 1 つのトピックを購読し、受信したメッセージを
/// ConsumeMessageUseCase に渡す。オフセットは自動コミットに任せる。
pub struct KafkaMessageConsumer {
    consumer: StreamConsumer,
    use_case: Arc<ConsumeMessageUseCase>,
}

impl KafkaMessageConsumer {
    /// 新しい KafkaMessageConsumer を作成し、起動時に一度だけ購読する。
    pub fn new(config: &KafkaConfig, use_case: Arc<ConsumeMessageUseCase>) -> anyhow::Result<Self> {
        let mut client_config = ClientConfig::new();
        client_config.set("bootstrap.servers", config.brokers_string());
        client_config.set("group.id", &config.consumer_group);
        client_config.set("security.protocol", &config.security_protocol);
        client_config.set("auto.offset.reset", &config.auto_offset_reset);
        client_config.set("enable.auto.commit", "true");

        let consumer: StreamConsumer = client_config.create()?;
        consumer.subscribe(&[config.consumer_topic.as_str()])?;

        tracing::info!(
            topic = %config.consumer_topic,
            group = %config.consumer_group,
            "kafka consumer subscribed"
        );

        Ok(Self { consumer, use_case })
    }

    /// shutdown がキャンセルされるまでメッセージを受信し続ける。
    pub async fn run(&self, shutdown: CancellationToken) {
        loop {
            tokio::select! {
                () = shutdown.cancelled() => {
                    tracing::info!("kafka consumer stopping");
                    return;
                }
                received = self.consumer.recv() => match received {
                    Err(e) => {
                        tracing::error!(error = %e, "kafka consumer error");
                    }
                    Ok(msg) => {
                        if let Err(e) = dispatch_payload(&self.use_case, msg.payload()) {
                            tracing::warn!(
                                error = %e,
                                topic = %msg.topic(),
                                partition = msg.partition(),
                                offset = msg.offset(),
                                "skipping kafka message"
                            );
                        }
                    }
                }
            }
        }
    }
}
