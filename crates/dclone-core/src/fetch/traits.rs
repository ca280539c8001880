use async_trait::async_trait;

use super::errors::FetchError;
use crate::servers::ServerSnapshot;

/// Source of status snapshots. One call is one fetch of the full batch.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ServerSnapshot>, FetchError>;
}
