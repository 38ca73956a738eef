use async_trait::async_trait;

use crate::error::Result;

/// Port for retrieving a remote document in full
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// GET `url` and return the response body.
    ///
    /// Transport failures and non-2xx statuses are errors.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
