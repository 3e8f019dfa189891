use crate::models::{Comment, CommentPage};
use crate::services::graph_client::{GraphApi, GraphError};

/// Cursor-state iterator over a paginated Graph collection.
///
/// Each `next_batch` call issues one GET against the current URL and stores
/// the response's `paging.next` for the following call. Batches that would
/// be empty are skipped; the chain ends when the response carries no next
/// page. A fresh pager always starts a fresh remote fetch from page one;
/// cursors are never reused across pagination sessions.
pub struct CommentPager<'a> {
    graph: &'a dyn GraphApi,
    next_url: Option<String>,
    initial_params: Vec<(String, String)>,
    first_page: bool,
}

impl<'a> CommentPager<'a> {
    pub fn new(
        graph: &'a dyn GraphApi,
        start_path: &str,
        initial_params: Vec<(String, String)>,
    ) -> Self {
        Self {
            graph,
            next_url: Some(start_path.to_string()),
            initial_params,
            first_page: true,
        }
    }

    /// Fetch the next non-empty batch, or `None` once the cursor chain ends.
    /// Remote failures propagate as-is; retry policy belongs to the caller.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<Comment>>, GraphError> {
        loop {
            let Some(url) = self.next_url.take() else {
                return Ok(None);
            };

            let params = if self.first_page {
                std::mem::take(&mut self.initial_params)
            } else {
                // `paging.next` already carries the cursor and field params.
                Vec::new()
            };
            self.first_page = false;

            let value = self.graph.get_json(&url, &params).await?;
            let page: CommentPage = serde_json::from_value(value)?;

            // Guard against a remote that repeats the same cursor forever.
            self.next_url = page
                .paging
                .and_then(|p| p.next)
                .filter(|next| *next != url);

            if !page.data.is_empty() {
                return Ok(Some(page.data));
            }
        }
    }

    /// Drain the whole chain into one ordered list.
    pub async fn collect_all(mut self) -> Result<Vec<Comment>, GraphError> {
        let mut comments = Vec::new();
        while let Some(batch) = self.next_batch().await? {
            comments.extend(batch);
        }
        Ok(comments)
    }
}
