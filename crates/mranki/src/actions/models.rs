//! Model (note type) AnkiConnect actions.

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to model-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::models()`].
#[derive(Debug)]
pub struct ModelActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

impl<'a> ModelActions<'a> {
    /// Get all note type (model) names.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mranki::AnkiClient;
    /// # async fn example() -> mranki::Result<()> {
    /// let client = AnkiClient::new();
    /// for model in client.models().names().await? {
    ///     println!("{}", model);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("modelNames").await
    }
}
