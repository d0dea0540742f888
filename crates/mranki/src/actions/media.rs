//! Media-related AnkiConnect actions.

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::StoreMediaParams;

/// Provides access to media-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::media()`].
#[derive(Debug)]
pub struct MediaActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

impl<'a> MediaActions<'a> {
    /// Store a media file in Anki's media folder.
    ///
    /// Returns the filename that was used (may differ from the requested one
    /// unless `deleteExisting` is set).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mranki::{AnkiClient, StoreMediaParams};
    ///
    /// # async fn example() -> mranki::Result<()> {
    /// let client = AnkiClient::new();
    ///
    /// let params = StoreMediaParams::from_path("mrcpsych_brain.png", "/tmp/brain.png")
    ///     .delete_existing(true);
    /// let filename = client.media().store(params).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn store(&self, params: StoreMediaParams) -> Result<String> {
        self.client.invoke("storeMediaFile", params).await
    }
}
