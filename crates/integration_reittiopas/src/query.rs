//! Query-string serialization
//!
//! Pure functions: no network I/O happens here, so the exact URL for any
//! request can be inspected and tested on its own.

use url::Url;

use domain::WireValue;

use crate::config::ClientConfig;
use crate::error::ReittiopasError;
use crate::request::PlannerRequest;

/// Build the complete request URL for `request` under `config`
///
/// Parameters are emitted as `user`, `pass`, `request`, `format`, `lang`
/// followed by the request's own parameters. Every key and value is
/// percent-encoded (a space becomes `%20`). A query string already present
/// on the endpoint is kept in front.
///
/// # Errors
///
/// Returns `ReittiopasError::ConfigurationError` if the endpoint is not a
/// valid URL.
pub fn build_url<R: PlannerRequest>(
    config: &ClientConfig,
    request: &R,
) -> Result<Url, ReittiopasError> {
    let mut url = Url::parse(&config.endpoint).map_err(|e| {
        ReittiopasError::ConfigurationError(format!(
            "endpoint '{}' is not a valid URL: {e}",
            config.endpoint
        ))
    })?;

    let query = encode_query(&query_params(config, request));
    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{query}"),
        _ => query,
    };
    url.set_query(Some(&query));

    Ok(url)
}

/// All parameters for `request`, in wire order and not yet encoded
pub fn query_params<R: PlannerRequest>(
    config: &ClientConfig,
    request: &R,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("user", config.username.clone()),
        ("pass", config.password.clone()),
        ("request", R::KIND.to_string()),
        ("format", config.format.as_wire().to_string()),
        ("lang", config.language.as_wire().to_string()),
    ];
    params.extend(request.params());
    params
}

/// Join parameters into `key=value&...` with both sides percent-encoded
pub fn encode_query<K: AsRef<str>, V: AsRef<str>>(params: &[(K, V)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key.as_ref()),
                urlencoding::encode(value.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// The URL as a string with the `pass` value masked, for logging
pub fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    if let Some(query) = url.query() {
        let query = query
            .split('&')
            .map(|pair| if pair.starts_with("pass=") { "pass=***" } else { pair })
            .collect::<Vec<_>>()
            .join("&");
        masked.set_query(Some(&query));
    }
    masked.to_string()
}
