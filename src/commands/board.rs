//! Board List Requests
//!
//! [`ListSource`] over the board's HTTP endpoints. Idempotent GETs retry on
//! network errors; deletes and like toggles are sent once.

use list_loader::{
    Endpoints, ItemId, ListSource, LoadError, LoadResult, PaginationParams, RetryPolicy,
};

use super::{get_json, get_text, send, sleep_ms};

pub struct HttpSource {
    endpoints: Endpoints,
    retry: RetryPolicy,
}

impl HttpSource {
    pub fn new(endpoints: Endpoints, retry: RetryPolicy) -> Self {
        Self { endpoints, retry }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn fetch_fragment(&self, url: String) -> LoadResult<String> {
        self.retry.run(|| get_text(&url), sleep_ms).await
    }
}

impl ListSource for HttpSource {
    async fn parameters(&self) -> LoadResult<PaginationParams> {
        let url = self.endpoints.parameters_url();
        let value = self.retry.run(|| get_json(&url), sleep_ms).await?;
        PaginationParams::from_json(&value, &self.endpoints.prefix)
    }

    async fn page(&self, page: u32) -> LoadResult<String> {
        self.fetch_fragment(self.endpoints.page_url(page)).await
    }

    async fn refill(&self, page: u32) -> LoadResult<String> {
        self.fetch_fragment(self.endpoints.refill_url(page)).await
    }

    async fn delete(&self, id: ItemId) -> LoadResult<()> {
        let url = self
            .endpoints
            .delete_url(id)
            .ok_or(LoadError::Unsupported("delete"))?;
        send("DELETE", &url).await?;
        Ok(())
    }

    async fn toggle_like(&self, post_id: &str, page: u32) -> LoadResult<String> {
        let url = self
            .endpoints
            .like_url(post_id, Some(page))
            .ok_or(LoadError::Unsupported("like"))?;
        get_text(&url).await
    }
}
