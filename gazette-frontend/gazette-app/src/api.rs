use gazette_api_types::search::SearchResult;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::{AppError, AppResult};

pub(crate) fn search_url(query: &str) -> String {
    format!("/api/search?q={}", utf8_percent_encode(query, NON_ALPHANUMERIC))
}

/// Queries the backend search endpoint. Callers hand in an already trimmed
/// query; an empty one is rejected before it hits the network.
pub(crate) async fn search(query: &str) -> AppResult<Vec<SearchResult>> {
    if query.trim().is_empty() {
        return Err(AppError::EmptyQuery);
    }
    fetch_api(&search_url(query)).await
}

#[cfg(not(feature = "ssr"))]
pub(crate) async fn fetch_api<T>(path: &str) -> AppResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let response = gloo_net::http::Request::get(path).send().await?;
    if !response.ok() {
        return Err(AppError::Status {
            code: response.status(),
            url: path.to_string(),
        });
    }
    let json = response.text().await?;
    serde_json::from_str(&json).map_err(|e| AppError::Json(e.to_string()))
}

#[cfg(feature = "ssr")]
pub(crate) async fn fetch_api<T>(path: &str) -> AppResult<T>
where
    T: serde::de::DeserializeOwned,
{
    // relative paths only resolve in the browser, so point at the backend
    let hostname = "http://localhost:8080";
    let url = format!("{hostname}{path}");
    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Status {
            code: status.as_u16(),
            url,
        });
    }
    let json = response.text().await?;
    serde_json::from_str(&json).map_err(|e| AppError::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_percent_encoded() {
        assert_eq!(search_url("rust"), "/api/search?q=rust");
        assert_eq!(search_url("rust async"), "/api/search?q=rust%20async");
        assert_eq!(search_url("C++"), "/api/search?q=C%2B%2B");
        assert_eq!(search_url("a&b=c"), "/api/search?q=a%26b%3Dc");
    }
}
