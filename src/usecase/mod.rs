pub mod consume_message;
pub mod send_message;

pub use consume_message::ConsumeMessageUseCase;
pub use send_message::SendMessageUseCase;
