//! Miscellaneous AnkiConnect actions: version probing and sync.

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to miscellaneous AnkiConnect operations.
///
/// Obtained via [`AnkiClient::misc()`].
#[derive(Debug)]
pub struct MiscActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

impl<'a> MiscActions<'a> {
    /// Get the AnkiConnect API version.
    ///
    /// This is useful for verifying that AnkiConnect is running and
    /// accessible; [`AnkiClient::is_available()`](crate::AnkiClient::is_available)
    /// wraps it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mranki::AnkiClient;
    ///
    /// # async fn example() -> mranki::Result<()> {
    /// let client = AnkiClient::new();
    /// let version = client.misc().version().await?;
    /// assert_eq!(version, 6);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn version(&self) -> Result<u8> {
        self.client.invoke_without_params("version").await
    }

    /// Trigger a sync with AnkiWeb.
    pub async fn sync(&self) -> Result<()> {
        self.client.invoke_void_without_params("sync").await
    }
}
