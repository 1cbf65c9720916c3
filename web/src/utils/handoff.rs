use shared_types::AnalysisResult;
use thiserror::Error;

/// sessionStorage keys carrying the report from the selector page to the
/// results page. Written once before navigation, read once on load,
/// cleared with the browser session.
pub const RESULT_KEY: &str = "analysisResult";
pub const IMAGE_URL_KEY: &str = "analyzedImageUrl";

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("no analysis data found")]
    Missing,
    #[error("stored analysis could not be read: {0}")]
    Parse(String),
    #[error("session storage is unavailable")]
    StorageUnavailable,
}

fn session_storage() -> Result<web_sys::Storage, HandoffError> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or(HandoffError::StorageUnavailable)
}

/// Persists the report and snapshot URL into the handoff slots. The
/// selector page is the sole writer; it calls this exactly once per
/// successful analysis, immediately before navigating.
pub fn write(result: &AnalysisResult, image_url: &str) -> Result<(), HandoffError> {
    let storage = session_storage()?;
    let json = serialize_result(result)?;
    storage
        .set_item(RESULT_KEY, &json)
        .map_err(|_| HandoffError::StorageUnavailable)?;
    storage
        .set_item(IMAGE_URL_KEY, image_url)
        .map_err(|_| HandoffError::StorageUnavailable)?;
    Ok(())
}

/// Reads both handoff slots. Either one missing means the user reached the
/// results page without running an analysis first.
pub fn read() -> Result<(AnalysisResult, String), HandoffError> {
    let storage = session_storage()?;
    let json = storage
        .get_item(RESULT_KEY)
        .ok()
        .flatten()
        .ok_or(HandoffError::Missing)?;
    let image_url = storage
        .get_item(IMAGE_URL_KEY)
        .ok()
        .flatten()
        .ok_or(HandoffError::Missing)?;
    Ok((parse_result(&json)?, image_url))
}

/// The serialization boundary between the two pages: stored text in,
/// validated report out. Kept separate from the storage access so it can
/// be exercised without a browser.
pub fn parse_result(json: &str) -> Result<AnalysisResult, HandoffError> {
    serde_json::from_str(json).map_err(|e| HandoffError::Parse(e.to_string()))
}

/// The exact text `write` puts into the result slot.
pub fn serialize_result(result: &AnalysisResult) -> Result<String, HandoffError> {
    serde_json::to_string(result).map_err(|e| HandoffError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Recommendation, Score};

    #[test]
    fn parses_a_stored_report() {
        let json = r#"{"status":"Well-Served","greenery_score":9,"justification":"Ample parks."}"#;
        let result = parse_result(json).unwrap();
        assert_eq!(result.status, "Well-Served");
        assert_eq!(result.greenery_score, Score::Number(9.0));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_result("not json at all"),
            Err(HandoffError::Parse(_))
        ));
        assert!(matches!(parse_result(""), Err(HandoffError::Parse(_))));
    }

    #[test]
    fn rejects_wrong_shape() {
        // Valid JSON, but not a report.
        assert!(matches!(
            parse_result(r#"{"foo": 1}"#),
            Err(HandoffError::Parse(_))
        ));
    }

    #[test]
    fn stored_report_reparses_deep_equal() {
        // What goes into the result slot must come back out unchanged.
        let result = AnalysisResult {
            status: "Underserved".to_string(),
            greenery_score: Score::Number(3.0),
            justification: "Dense housing, few parks.".to_string(),
            recommendations: Some(vec![Recommendation {
                name: "Empty Lot by Elm Street".to_string(),
                reason: "Barren land beside housing.".to_string(),
                location_on_image: "bottom-left".to_string(),
            }]),
        };

        let stored = serialize_result(&result).unwrap();
        assert_eq!(parse_result(&stored).unwrap(), result);
    }

    #[test]
    fn error_messages_read_well() {
        assert_eq!(HandoffError::Missing.to_string(), "no analysis data found");
    }
}
