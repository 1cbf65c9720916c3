use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{AnalysisResult, MapBounds};

#[cfg(feature = "ssr")]
use crate::utils::static_map;

#[cfg(feature = "ssr")]
const DEFAULT_ANALYZE_ENDPOINT: &str =
    "https://urban-infra-backend-637815989971.us-central1.run.app/analyze";

/// Body of the analysis request: the snapshot URL and nothing else.
#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    #[serde(rename = "imageUrl")]
    image_url: &'a str,
}

/// Failure shape the analysis service uses when it can.
#[derive(Deserialize)]
struct AnalyzeErrorBody {
    error: String,
}

/// Builds the static snapshot URL for a captured region. The API key lives
/// in server configuration (`STATIC_MAPS_API_KEY`), never in the page.
#[server]
pub async fn get_static_map_url(bounds: MapBounds) -> Result<String, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        match std::env::var("STATIC_MAPS_API_KEY") {
            Ok(key) if !key.is_empty() => Ok(static_map::build_url(&bounds, &key)),
            _ => {
                leptos::logging::error!("STATIC_MAPS_API_KEY is not configured");
                Err(ServerFnError::new(
                    "The static map API key is not configured on the server".to_string(),
                ))
            }
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = bounds;
        Err(ServerFnError::new(
            "Server-side rendering not available".to_string(),
        ))
    }
}

/// Submits a snapshot URL to the greenery-analysis service and returns its
/// report. One POST per invocation; the caller is responsible for not
/// issuing a second one while this is in flight.
#[server]
pub async fn analyze_area(image_url: String) -> Result<AnalysisResult, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        let endpoint = std::env::var("ANALYZE_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ANALYZE_ENDPOINT.to_string());

        tracing::debug!(%endpoint, "submitting snapshot for analysis");

        let client = reqwest::Client::new();
        let response = match client
            .post(&endpoint)
            .json(&AnalyzeRequest {
                image_url: &image_url,
            })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                leptos::logging::error!("Analysis request failed to send: {}", e);
                return Err(ServerFnError::new(format!(
                    "Could not reach the analysis service: {}",
                    e
                )));
            }
        };

        let status = response.status();
        if !status.is_success() {
            // Prefer the service's own message when the error body parses.
            let message = match response.json::<AnalyzeErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("Analysis service returned HTTP {}", status.as_u16()),
            };
            leptos::logging::log!("Analysis rejected: {}", message);
            return Err(ServerFnError::new(message));
        }

        // A 2xx body that is not a well-formed report is still a failure,
        // never something to render.
        match response.json::<AnalysisResult>().await {
            Ok(result) => {
                tracing::info!(status = %result.status, "analysis completed");
                Ok(result)
            }
            Err(e) => {
                leptos::logging::error!("Analysis response did not parse: {}", e);
                Err(ServerFnError::new(
                    "The analysis service returned an unreadable report".to_string(),
                ))
            }
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = image_url;
        Err(ServerFnError::new(
            "Server-side rendering not available".to_string(),
        ))
    }
}
