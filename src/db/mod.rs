pub mod reply_log_store;

pub use reply_log_store::{MemoryReplyLogStore, PgReplyLogStore, ReplyLogStore};
