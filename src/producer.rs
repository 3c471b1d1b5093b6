//! Producer adaptors.
//!
//! A producer is a zero-argument asynchronous function yielding an ordered
//! sequence of items, or rejecting with a [`RawFailure`]. Controllers hold
//! the producer so `retry` can re-invoke the identical operation.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;

use crate::error::RawFailure;

/// Caller-supplied asynchronous data-loading function.
pub type Producer<T> =
    Arc<dyn Fn() -> BoxFuture<'static, Result<Vec<T>, RawFailure>> + Send + Sync>;

/// Wrap a plain async closure as a [`Producer`].
pub fn producer<T, F, Fut>(f: F) -> Producer<T>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, RawFailure>> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

/// Coerce a JSON success value into an item sequence.
///
/// Backends occasionally answer a list endpoint with an object or scalar;
/// anything that is not an array becomes an empty sequence rather than a
/// failure.
pub fn items_from_json(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// Build a producer that GETs a JSON list from `url`.
///
/// Transport errors and non-2xx responses are mapped into [`RawFailure`]
/// shapes the classifier understands; response bodies are retained when they
/// parse as JSON.
pub fn json_producer<S: Into<String>>(client: reqwest::Client, url: S) -> Producer<Value> {
    let url = url.into();
    producer(move || {
        let client = client.clone();
        let url = url.clone();
        async move {
            let response = client.get(&url).send().await.map_err(RawFailure::from)?;
            if !response.status().is_success() {
                return Err(RawFailure::from_http_response(response).await);
            }
            let body = response.json::<Value>().await.map_err(RawFailure::from)?;
            Ok(items_from_json(body))
        }
    })
}
