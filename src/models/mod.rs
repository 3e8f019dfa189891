pub mod messenger;
pub mod reply_log;

pub use messenger::{
    Comment, CommentAuthor, CommentPage, Cursors, Paging, WebhookPayload, WebhookVerification,
};
pub use reply_log::{NewReplyLog, ReplyLog, ReplyStatus};
