use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::errors::ApiError;

const QUOTE_ENDPOINT: &str = "https://hq.sinajs.cn/etag.php";

/* The endpoint only answers requests that look like they come from the
finance site itself. */
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "User-Agent",
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:127.0) Gecko/20100101 Firefox/127.0",
        ),
    );
    headers.insert(
        "Accept-Encoding",
        HeaderValue::from_static("gzip, deflate, br, zstd"),
    );
    headers.insert(
        "Referer",
        HeaderValue::from_static("https://stock.finance.sina.com.cn/"),
    );
    return headers;
}

fn quote_list(symbols: &[String]) -> String {
    return symbols
        .iter()
        .map(|symbol| format!("gb_{}", symbol.to_lowercase()))
        .collect::<Vec<String>>()
        .join(",");
}

/* Fetch the raw quote text for a batch of symbols in a single request. The
rn parameter is the current time in milliseconds so intermediaries never
serve a cached response. Any transport failure or non-success status is
fatal: without quote data there is nothing to compute. */
#[tokio::main]
pub async fn fetch_quote_text(symbols: &[String]) -> Result<String, ApiError> {
    let rn = Utc::now().timestamp_millis();
    let url = format!("{QUOTE_ENDPOINT}?rn={rn}&list={}", quote_list(symbols));

    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .headers(browser_headers())
        .send()
        .await
        .map_err(|e| ApiError::ApiCallError(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::BadStatus(status.as_u16()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::ApiCallError(e.to_string()))?;
    return Ok(text);
}
