pub mod handlers;
pub mod signature;

pub use handlers::{get_webhook, post_webhook, root};
pub use signature::verify_signature;
