use std::time::Duration;

use tracing::{info, warn};

use crate::structs::Settings;

const BARK_ENDPOINT: &str = "https://api.day.app";
const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(10);

/* Send a push notification through Bark. Failures are logged and swallowed:
the report was already computed, a notification hiccup must not fail the run. */
#[tokio::main]
pub async fn send_bark_notification(settings: &Settings, title: &str, body: &str) {
    send_notification_to(BARK_ENDPOINT, settings, title, body).await;
}

async fn send_notification_to(endpoint: &str, settings: &Settings, title: &str, body: &str) {
    let encoded_title = urlencoding::encode(title);
    let encoded_body = urlencoding::encode(body);
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("group", &settings.bark_group)
        .finish();
    let url = format!(
        "{endpoint}/{}/{encoded_title}/{encoded_body}?{query}",
        settings.bark_key
    );

    let client = match reqwest::Client::builder()
        .timeout(NOTIFICATION_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            warn!(error = %e, "Failed to build notification client");
            return;
        }
    };

    match client.get(url).send().await {
        Ok(response) if response.status().is_success() => {
            info!("Bark notification sent successfully");
        }
        Ok(response) => {
            warn!(status = %response.status(), "Bark notification rejected");
        }
        Err(e) => {
            warn!(error = %e, "Failed to send Bark notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        return Settings {
            benchmark_index: "IXIC".to_string(),
            benchmark_name: "NASDAQ".to_string(),
            market_comments: Vec::new(),
            bark_key: "test-key".to_string(),
            bark_group: "stocks".to_string(),
        };
    }

    /* Port 9 (discard) has no listener; the send must come back without
    panicking or returning an error to the caller. */
    #[tokio::test]
    async fn delivery_failure_is_swallowed() {
        send_notification_to("http://127.0.0.1:9", &settings(), "title", "body with spaces").await;
    }
}
