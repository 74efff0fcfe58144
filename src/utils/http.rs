use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE, ORIGIN, REFERER};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// One client per flow, reused for every request. The cookie store keeps a
/// login session alive across requests; a fixed `Cookie` header carries a
/// pre-captured credential.
pub fn build_client(
    timeout_ms: u64,
    referer: &str,
    cookie: Option<&str>,
) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(REFERER, HeaderValue::from_str(referer)?);
    headers.insert(ORIGIN, HeaderValue::from_str(referer.trim_end_matches('/'))?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(cookie) = cookie {
        headers.insert(COOKIE, HeaderValue::from_str(cookie)?);
    }

    let client = Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .cookie_store(true)
        .build()?;

    Ok(client)
}

pub async fn get_json(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<serde_json::Value> {
    let response = client.get(url).query(query).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("HTTP error: {}", response.status());
    }
    Ok(response.json().await?)
}

pub async fn post_json(
    client: &Client,
    url: &str,
    body: &serde_json::Value,
    extra_headers: &[(&str, &str)],
) -> Result<(reqwest::StatusCode, serde_json::Value)> {
    let mut request = client.post(url).json(body);
    for (name, value) in extra_headers {
        request = request.header(*name, *value);
    }

    let response = request.send().await?;
    let status = response.status();
    let body = response.json().await?;
    Ok((status, body))
}
