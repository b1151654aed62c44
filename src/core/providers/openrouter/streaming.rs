//! Authenticated OpenRouter streaming
//!
//! Wraps any [`StreamTransport`] so every request carries the OpenRouter bearer
//! credential and the attribution headers OpenRouter uses for app rankings.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use super::config::{DEFAULT_SITE_NAME, DEFAULT_SITE_URL, PROVIDER_NAME};
use super::error::OpenRouterError;
use crate::core::traits::{EventStream, StreamTransport};
use crate::core::types::{Context, Model, StreamOptions};

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const HTTP_REFERER_HEADER: &str = "HTTP-Referer";
pub const X_TITLE_HEADER: &str = "X-Title";

/// Calling application identity sent with every routed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    /// `HTTP-Referer`
    pub referer: String,
    /// `X-Title`
    pub title: String,
}

impl Attribution {
    pub fn new(referer: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            referer: referer.into(),
            title: title.into(),
        }
    }
}

impl Default for Attribution {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL, DEFAULT_SITE_NAME)
    }
}

/// Stream function returned by [`create_openrouter_stream_fn`]
#[derive(Clone)]
pub struct OpenRouterStreamFn<T> {
    api_key: String,
    attribution: Attribution,
    transport: T,
}

/// Build an authenticated stream function around `transport`.
///
/// `api_key` must already be trimmed and non-empty. No I/O happens here.
pub fn create_openrouter_stream_fn<T: StreamTransport>(
    api_key: impl Into<String>,
    transport: T,
) -> OpenRouterStreamFn<T> {
    create_openrouter_stream_fn_with_attribution(api_key, Attribution::default(), transport)
}

/// Same as [`create_openrouter_stream_fn`] with custom attribution
pub fn create_openrouter_stream_fn_with_attribution<T: StreamTransport>(
    api_key: impl Into<String>,
    attribution: Attribution,
    transport: T,
) -> OpenRouterStreamFn<T> {
    OpenRouterStreamFn {
        api_key: api_key.into(),
        attribution,
        transport,
    }
}

impl<T> OpenRouterStreamFn<T> {
    pub fn attribution(&self) -> &Attribution {
        &self.attribution
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Merge the OpenRouter headers into `options`.
    ///
    /// Caller headers are kept, but the three OpenRouter headers are applied last and
    /// replace any caller header with the same name in any casing. A caller can never
    /// strip or override the credential.
    pub fn apply_headers(&self, mut options: StreamOptions) -> StreamOptions {
        let headers = &mut options.headers;
        set_header(
            headers,
            AUTHORIZATION_HEADER,
            format!("Bearer {}", self.api_key),
        );
        set_header(headers, HTTP_REFERER_HEADER, self.attribution.referer.clone());
        set_header(headers, X_TITLE_HEADER, self.attribution.title.clone());
        options
    }
}

fn set_header(headers: &mut HashMap<String, String>, name: &str, value: String) {
    headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value);
}

#[async_trait]
impl<T: StreamTransport> StreamTransport for OpenRouterStreamFn<T> {
    async fn stream(
        &self,
        model: &Model,
        context: &Context,
        options: StreamOptions,
    ) -> Result<EventStream, OpenRouterError> {
        let options = self.apply_headers(options);
        debug!(
            provider = PROVIDER_NAME,
            model = %model.id,
            header_count = options.headers.len(),
            "Dispatching authenticated OpenRouter stream"
        );
        self.transport.stream(model, context, options).await
    }
}

impl<T> fmt::Debug for OpenRouterStreamFn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterStreamFn")
            .field("api_key", &"[REDACTED]")
            .field("attribution", &self.attribution)
            .finish_non_exhaustive()
    }
}
