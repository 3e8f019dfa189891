pub mod dispatcher;
pub mod graph_client;
pub mod paginator;

pub use dispatcher::{DispatchResult, Dispatcher, ReplyOutcome};
pub use graph_client::{GraphApi, GraphClient, GraphError};
pub use paginator::CommentPager;
