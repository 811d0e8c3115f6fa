//! Request construction for the API.
//!
//! A [`Request`] is an immutable description of one GET call: the resolved
//! absolute URL plus the owning [`Endpoint`], when one can be determined.
//! Two construction paths exist because some requests come from static
//! knowledge (endpoint, id, query pairs) while others come from URLs already
//! embedded in fetched data (pagination links, cross-resource references).
//! Both produce the same type, so the execution service never cares where a
//! request originated.

use url::Url;

use crate::api::endpoint::Endpoint;
use crate::api::error::ApiError;

/// An immutable description of one HTTP GET call.
///
/// Built immediately before use and discarded after the call completes.
/// `endpoint` is `None` for arbitrary URLs that do not sit under the
/// configured base, and such requests bypass the response cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: Url,
    endpoint: Option<Endpoint>,
}

impl Request {
    /// The resolved absolute URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The owning endpoint, when the URL maps to one.
    pub fn endpoint(&self) -> Option<Endpoint> {
        self.endpoint
    }
}

/// Builds [`Request`] values against a fixed base URL.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base: Url,
}

impl RequestBuilder {
    /// Create a builder for the given absolute http(s) base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        match base.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiError::InvalidUrl(format!("unsupported scheme: {scheme}")));
            }
        }
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{base_url}: cannot be a base URL")));
        }

        Ok(Self { base })
    }

    /// Build a request from static knowledge: the endpoint, an optional
    /// single path component (e.g. a numeric resource id), and query pairs
    /// appended in the order supplied, with values percent-encoded.
    pub fn build(
        &self, endpoint: Endpoint, path: Option<&str>, query: &[(&str, &str)],
    ) -> Result<Request, ApiError> {
        let mut url = self.base.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(format!("{}: cannot be a base URL", self.base)))?;
            segments.pop_if_empty().push(endpoint.as_str());
            if let Some(path) = path {
                segments.push(path);
            }
        }

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(Request { url, endpoint: Some(endpoint) })
    }

    /// Wrap an arbitrary absolute URL as a request.
    ///
    /// Used for `next` pagination links and for resource URLs embedded in
    /// other resources. The owning endpoint is derived from the URL path
    /// when the URL sits under this builder's base; otherwise the request
    /// carries no endpoint and is not cacheable.
    pub fn from_url(&self, input: &str) -> Result<Request, ApiError> {
        let url = Url::parse(input).map_err(|e| ApiError::InvalidUrl(format!("{input}: {e}")))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiError::InvalidUrl(format!("unsupported scheme: {scheme}")));
            }
        }

        let endpoint = self.endpoint_of(&url);
        Ok(Request { url, endpoint })
    }

    /// Derive the owning endpoint from a URL's path, if the URL sits under
    /// the base and its first path segment past the base names an endpoint.
    fn endpoint_of(&self, url: &Url) -> Option<Endpoint> {
        if url.scheme() != self.base.scheme()
            || url.host_str() != self.base.host_str()
            || url.port_or_known_default() != self.base.port_or_known_default()
        {
            return None;
        }

        let base_path = self.base.path().trim_end_matches('/');
        let rest = url.path().strip_prefix(base_path)?;
        let rest = rest.strip_prefix('/')?;
        let segment = rest.split('/').next()?;

        Endpoint::from_segment(segment)
    }
}
