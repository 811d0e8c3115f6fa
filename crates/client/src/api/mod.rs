//! Rick and Morty API client.
//!
//! Provides the single network entry point for the workspace: typed request
//! execution with per-endpoint response caching.
//!
//! ### Contract
//!
//! - **Requests**: HTTP GET only; built from (endpoint, optional id, query
//!   pairs) or from an absolute URL supplied by upstream response data.
//! - **Caching**: raw response bytes keyed by exact URL within the owning
//!   endpoint's partition. A cache hit never touches the network, even when
//!   decoding the cached bytes fails. Requests with no owning endpoint
//!   bypass the cache.
//! - **Decoding**: happens on every call, cache hit or not; a network body
//!   that fails to decode is still cached, so a later call expecting a
//!   different shape can reuse the bytes.
//! - **Concurrency**: one client instance is safe to share across any
//!   number of concurrent calls. Identical in-flight requests are not
//!   deduplicated; each one misses, fetches, and writes, and the last
//!   writer wins the cache slot.

pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;

pub use endpoint::Endpoint;
pub use error::ApiError;
pub use request::{Request, RequestBuilder};
pub use response::{
    Character, CharacterGender, CharacterStatus, Episode, Location, LocationRef, Page, PageInfo,
};

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use morty_core::{AppConfig, ResponseCache};

use crate::fetch::{HttpTransport, Transport};

/// Upper bound on concurrent network calls during a fan-out.
const MAX_CONCURRENT_REQUESTS: usize = 8;

/// API client: request construction, caching, and typed execution.
#[derive(Debug)]
pub struct ApiClient<T: Transport = HttpTransport> {
    transport: Arc<T>,
    cache: ResponseCache,
    builder: RequestBuilder,
}

impl ApiClient<HttpTransport> {
    /// Create a client over a real HTTP transport.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Self::with_transport(HttpTransport::new(config)?, config)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: T, config: &AppConfig) -> Result<Self, ApiError> {
        let builder = RequestBuilder::new(&config.base_url)?;

        let partitions: Vec<&'static str> =
            Endpoint::ALL.iter().map(|endpoint| endpoint.as_str()).collect();
        let cache = ResponseCache::new(&partitions, config.cache_max_bytes);

        Ok(Self { transport: Arc::new(transport), cache, builder })
    }

    /// Request builder bound to this client's base URL.
    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// The underlying response cache.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Execute a request and decode the response as `M`.
    ///
    /// Checks the cache first when the request has an owning endpoint; on a
    /// miss, performs the GET and stores the raw bytes before decoding, so
    /// the cache write happens whether or not the body matches `M`.
    pub async fn execute<M>(&self, request: &Request) -> Result<M, ApiError>
    where
        M: DeserializeOwned,
    {
        if let Some(endpoint) = request.endpoint()
            && let Some(body) = self.cache.get(endpoint.as_str(), request.url().as_str()).await
        {
            tracing::debug!("cache hit for {}", request.url());
            return decode(&body);
        }

        let body = self.transport.get(request.url()).await?;

        if let Some(endpoint) = request.endpoint() {
            self.cache.put(endpoint.as_str(), request.url().as_str(), body.clone()).await;
        }

        decode(&body)
    }

    /// Fetch the page following `page`, or `None` on the final page.
    ///
    /// The follow-up request targets exactly the URL the envelope
    /// advertised.
    pub async fn next_page<M>(&self, page: &Page<M>) -> Result<Option<Page<M>>, ApiError>
    where
        M: DeserializeOwned,
    {
        let Some(next) = page.next_url() else {
            return Ok(None);
        };

        let request = self.builder.from_url(next)?;
        self.execute(&request).await.map(Some)
    }

    /// Execute many requests concurrently and join the results.
    ///
    /// At most [`MAX_CONCURRENT_REQUESTS`] calls are in flight at once.
    /// Completion order is whatever the transport returns; results are
    /// handed back in input order, one per request, each independently a
    /// success or an error.
    pub async fn execute_many<M>(&self, requests: Vec<Request>) -> Vec<Result<M, ApiError>>
    where
        M: DeserializeOwned + Send + 'static,
    {
        let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_REQUESTS));
        let total = requests.len();
        let mut join_set = JoinSet::new();

        for (index, request) in requests.into_iter().enumerate() {
            let permit = semaphore.clone().acquire_owned().await.unwrap();
            let client = self.clone();

            join_set.spawn(async move {
                // NOTE: Hold permit for task duration to enforce concurrency limit
                let _permit = permit;
                (index, client.execute::<M>(&request).await)
            });
        }

        let mut slots: Vec<Option<Result<M, ApiError>>> = Vec::with_capacity(total);
        slots.resize_with(total, || None);

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
                Err(_) => {}
            }
        }

        slots
            .into_iter()
            .map(|slot| slot.expect("every spawned request reports a result"))
            .collect()
    }
}

impl<T: Transport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            cache: self.cache.clone(),
            builder: self.builder.clone(),
        }
    }
}

fn decode<M: DeserializeOwned>(body: &Bytes) -> Result<M, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}
