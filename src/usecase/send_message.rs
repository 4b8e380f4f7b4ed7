use std::sync::Arc;

use crate::domain::entity::Message;
use crate::infrastructure::diagnostic::DiagnosticSink;
use crate::infrastructure::kafka::producer::MessagePublisher;

/// SendMessageUseCase は受け付けたメッセージを固定トピックへ発行する。
pub struct SendMessageUseCase {
    publisher: Arc<dyn MessagePublisher>,
    sink: Arc<dyn DiagnosticSink>,
    topic: String,
}

impl SendMessageUseCase {
    pub fn new(
        publisher: Arc<dyn MessagePublisher>,
        sink: Arc<dyn DiagnosticSink>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            publisher,
            sink,
            topic: topic.into(),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// 診断行を書き出してから発行する。再試行はしない。
    pub async fn execute(&self, message: &Message) -> anyhow::Result<()> {
        self.sink.write_line(&message.produce_line());
        self.publisher
            .publish(&self.topic, message.payload())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::diagnostic::MockDiagnosticSink;
    use crate::infrastructure::kafka::producer::MockMessagePublisher;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_send_message_publishes_to_fixed_topic() {
        let mut publisher = MockMessagePublisher::new();
        publisher
            .expect_publish()
            .with(eq("test_topic"), eq("hello"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut sink = MockDiagnosticSink::new();
        sink.expect_write_line()
            .with(eq("Produce message => hello"))
            .times(1)
            .return_const(());

        let uc = SendMessageUseCase::new(Arc::new(publisher), Arc::new(sink), "test_topic");
        uc.execute(&Message::new("hello")).await.unwrap();
    }

    #[tokio::test]
    async fn test_send_message_propagates_publish_error() {
        let mut publisher = MockMessagePublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("broker unavailable")));

        let mut sink = MockDiagnosticSink::new();
        sink.expect_write_line().times(1).return_const(());

        let uc = SendMessageUseCase::new(Arc::new(publisher), Arc::new(sink), "test_topic");
        let result = uc.execute(&Message::new("hello")).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("broker unavailable"));
    }

    #[tokio::test]
    async fn test_send_message_does_not_transform_payload() {
        let payload = "  a=b&c=d  日本語\t";
        let mut publisher = MockMessagePublisher::new();
        publisher
            .expect_publish()
            .with(eq("events"), eq(payload))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut sink = MockDiagnosticSink::new();
        sink.expect_write_line().return_const(());

        let uc = SendMessageUseCase::new(Arc::new(publisher), Arc::new(sink), "events");
        assert_eq!(uc.topic(), "events");
        uc.execute(&Message::new(payload)).await.unwrap();
    }
}
