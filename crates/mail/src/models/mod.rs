//! Domain models for the purge pipeline

mod message;
mod sender;

pub use message::MessageId;
pub use sender::SenderFilter;
