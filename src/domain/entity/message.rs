/// 送信時の診断出力の接頭辞。
pub const PRODUCE_PREFIX: &str = "Produce message => ";

/// 受信時の診断出力の接頭辞。
pub const CONSUME_PREFIX: &str = "Consumer message => ";

/// Message はブリッジを流れる不透明なテキストメッセージ。
/// キー・ヘッダー・スキーマは持たず、ペイロードは一切加工しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    payload: String,
}

impl Message {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// 送信前に書き出す診断行を返す。
    pub fn produce_line(&self) -> String {
        format!("{PRODUCE_PREFIX}{}", self.payload)
    }

    /// 受信時に書き出す診断行を返す。
    pub fn consume_line(&self) -> String {
        format!("{CONSUME_PREFIX}{}", self.payload)
    }
}

impl From<String> for Message {
    fn from(payload: String) -> Self {
        Self::new(payload)
    }
}

impl From<&str> for Message {
    fn from(payload: &str) -> Self {
        Self::new(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produce_line() {
        let msg = Message::new("hello");
        assert_eq!(msg.produce_line(), "Produce message => hello");
    }

    #[test]
    fn test_consume_line() {
        let msg = Message::new("world");
        assert_eq!(msg.consume_line(), "Consumer message => world");
    }

    #[test]
    fn test_payload_is_kept_verbatim() {
        let raw = "  spaces, 日本語, {\"json\": true}\n";
        let msg = Message::from(raw);
        assert_eq!(msg.payload(), raw);
        assert_eq!(msg.consume_line(), format!("Consumer message => {raw}"));
    }

    #[test]
    fn test_empty_payload() {
        let msg = Message::from(String::new());
        assert_eq!(msg.produce_line(), "Produce message => ");
    }
}
