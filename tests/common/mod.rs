use pagereply_rust_ws::db::MemoryReplyLogStore;
use pagereply_rust_ws::services::GraphClient;
use pagereply_rust_ws::state::AppState;
use std::sync::Arc;
use std::time::Duration;

pub const VERIFY_TOKEN: &str = "secret-token";
pub const APP_SECRET: &str = "app-secret-123";

/// State wired to a mock Graph server and an in-memory audit log.
/// The inter-reply delay is zero so dispatch tests run instantly.
pub fn test_state(
    graph_uri: &str,
    app_secret: &str,
) -> (Arc<AppState>, Arc<MemoryReplyLogStore>) {
    let graph = Arc::new(GraphClient::new(graph_uri, "v21.0", "test-token").unwrap());
    let store = Arc::new(MemoryReplyLogStore::default());
    let state = AppState::with_parts(
        graph,
        store.clone(),
        VERIFY_TOKEN,
        app_secret,
        Duration::ZERO,
    );
    (Arc::new(state), store)
}
