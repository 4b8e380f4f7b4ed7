use std::sync::Arc;

use crate::domain::entity::Message;
use crate::infrastructure::diagnostic::DiagnosticSink;

/// ConsumeMessageUseCase は購読トピックから受信したメッセージを診断出力に書き出す。
pub struct ConsumeMessageUseCase {
    sink: Arc<dyn DiagnosticSink>,
}

impl ConsumeMessageUseCase {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    pub fn execute(&self, message: &Message) {
        self.sink.write_line(&message.consume_line());
    }
}
