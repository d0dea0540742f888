//! The AnkiConnect client and builder.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::actions::{DeckActions, MediaActions, MiscActions, ModelActions, NoteActions};
use crate::error::{Error, Result};
use crate::request::{AnkiRequest, AnkiResponse};

/// Default URL for AnkiConnect.
const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The client for talking to AnkiConnect.
///
/// # Example
///
/// ```no_run
/// use mranki::AnkiClient;
///
/// # async fn example() -> mranki::Result<()> {
/// // Create a client with default settings
/// let client = AnkiClient::new();
///
/// // Check the AnkiConnect version
/// let version = client.misc().version().await?;
/// println!("AnkiConnect version: {}", version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http_client: Client,
    base_url: String,
}

impl AnkiClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://127.0.0.1:8765` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Check whether AnkiConnect is reachable.
    ///
    /// Issues a `version` probe and collapses every failure to `false`.
    /// This is the one place errors are deliberately swallowed; use
    /// [`misc().version()`](MiscActions::version) when the failure matters.
    pub async fn is_available(&self) -> bool {
        self.misc().version().await.is_ok()
    }

    /// Access deck operations.
    pub fn decks(&self) -> DeckActions<'_> {
        DeckActions { client: self }
    }

    /// Access note operations.
    pub fn notes(&self) -> NoteActions<'_> {
        NoteActions { client: self }
    }

    /// Access media operations.
    pub fn media(&self) -> MediaActions<'_> {
        MediaActions { client: self }
    }

    /// Access model (note type) operations.
    pub fn models(&self) -> ModelActions<'_> {
        ModelActions { client: self }
    }

    /// Access miscellaneous operations.
    pub fn misc(&self) -> MiscActions<'_> {
        MiscActions { client: self }
    }

    /// Execute an action without parameters.
    pub(crate) async fn invoke_without_params<R>(&self, action: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = AnkiRequest::<()>::without_params(action);
        self.send_request(&request).await
    }

    /// Execute an action with parameters.
    pub(crate) async fn invoke<P, R>(&self, action: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = AnkiRequest::new(action, params);
        self.send_request(&request).await
    }

    /// Execute an action that returns null on success.
    pub(crate) async fn invoke_void_without_params(&self, action: &str) -> Result<()> {
        let request = AnkiRequest::<()>::without_params(action);
        self.send_void_request(&request).await
    }

    /// Execute an action where a null result is meaningful.
    pub(crate) async fn invoke_nullable<P, R>(&self, action: &str, params: P) -> Result<Option<R>>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = AnkiRequest::new(action, params);
        self.send_nullable_request(&request).await
    }

    async fn post<T>(&self, request: &AnkiRequest<'_, T>) -> Result<reqwest::Response>
    where
        T: Serialize,
    {
        self.http_client
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::ConnectionRefused
                } else {
                    Error::Http(e)
                }
            })
    }

    /// Send a request to AnkiConnect and process the response.
    async fn send_request<T, R>(&self, request: &AnkiRequest<'_, T>) -> Result<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let response = self.post(request).await?;
        let anki_response: AnkiResponse<R> = response.json().await?;

        match (anki_response.result, anki_response.error) {
            (Some(result), None) => Ok(result),
            (_, Some(err)) => Err(Error::Anki(err)),
            (None, None) => Err(Error::EmptyResponse),
        }
    }

    /// Send a request for an action that returns null on success.
    async fn send_void_request<T>(&self, request: &AnkiRequest<'_, T>) -> Result<()>
    where
        T: Serialize,
    {
        let response = self.post(request).await?;

        // For void actions, a null result is success - only check the error
        let anki_response: AnkiResponse<serde_json::Value> = response.json().await?;

        match anki_response.error {
            Some(err) => Err(Error::Anki(err)),
            None => Ok(()),
        }
    }

    /// Send a request for an action where null is a valid response.
    async fn send_nullable_request<T, R>(&self, request: &AnkiRequest<'_, T>) -> Result<Option<R>>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let response = self.post(request).await?;
        let anki_response: AnkiResponse<R> = response.json().await?;

        match (anki_response.result, anki_response.error) {
            (Some(result), None) => Ok(Some(result)),
            (_, Some(err)) => Err(Error::Anki(err)),
            (None, None) => Ok(None),
        }
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use mranki::AnkiClient;
///
/// let client = AnkiClient::builder()
///     .url("http://localhost:8765")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the AnkiConnect URL.
    ///
    /// Defaults to `http://127.0.0.1:8765`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> AnkiClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        AnkiClient {
            http_client,
            base_url: self.base_url,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
