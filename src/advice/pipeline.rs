use reqwest::Client;
use serde::{Deserialize, Serialize};
use anyhow::Context;
use tokio::time::{timeout, Duration};
use std::sync::OnceLock;

use crate::error::MentoriaError;

/// Reusable HTTP client singleton (created once, reused for all requests)
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

fn get_http_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(4)
            .build()
            .expect("Failed to create HTTP client")
    })
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    done: bool,
}

/// Call the text-generation endpoint and return the concatenated
/// response text. The endpoint streams one JSON object per line; the
/// whole body is read and stitched together client-side. The timeout
/// covers the entire call. Failures come back as MentoriaError tagged
/// with the model that failed.
pub async fn call_advice_model(
    endpoint: &str,
    model: &str,
    prompt: &str,
    timeout_duration: Duration,
) -> Result<String, MentoriaError> {
    let start = std::time::Instant::now();

    let result = timeout(timeout_duration, async {
        let client = get_http_client();

        let response = client
            .post(endpoint)
            .json(&GenerateRequest {
                model: model.to_string(),
                prompt: prompt.to_string(),
                stream: true,
            })
            .send()
            .await
            .with_context(|| format!("Failed to connect to advice endpoint for model '{}'", model))?;

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response from model '{}'", model))?;

        // Parse streaming response (one JSON object per line)
        let mut full_response = String::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(res) = serde_json::from_str::<GenerateResponse>(line) {
                full_response.push_str(&res.response);
                if res.done {
                    break;
                }
            }
        }

        if full_response.is_empty() {
            anyhow::bail!("Model '{}' returned empty response", model);
        }

        Ok(full_response)
    })
    .await;

    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Ok(response)) => {
            tracing::info!(model = model, latency_ms = latency_ms, "Advice model call succeeded");
            Ok(response)
        }
        Ok(Err(e)) => {
            tracing::warn!(model = model, latency_ms = latency_ms, error = %e, "Advice model call failed");
            Err(MentoriaError::from(e).with_model(model))
        }
        Err(elapsed) => {
            tracing::error!(
                model = model,
                timeout_secs = timeout_duration.as_secs(),
                "Advice model call timed out"
            );
            Err(MentoriaError::from(elapsed)
                .with_model(model)
                .with_context(format!("timeout: {}s", timeout_duration.as_secs())))
        }
    }
}
