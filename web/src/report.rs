//! Pure view-model for the results page: status colors, marker placement
//! and hover-highlight state, kept free of DOM access so the rendering
//! rules can be tested directly.

use shared_types::{AnalysisResult, STATUS_ADEQUATE, STATUS_UNDERSERVED, STATUS_WELL_SERVED};

pub const COLOR_UNDERSERVED: &str = "#d9534f";
pub const COLOR_ADEQUATE: &str = "#5cb85c";
pub const COLOR_WELL_SERVED: &str = "#28a745";
pub const COLOR_NEUTRAL: &str = "#777";

/// Banner color for a status value. Total over all strings: anything
/// outside the documented enumeration renders neutral gray instead of
/// failing.
pub fn status_color(status: &str) -> &'static str {
    match status {
        STATUS_UNDERSERVED => COLOR_UNDERSERVED,
        STATUS_ADEQUATE => COLOR_ADEQUATE,
        STATUS_WELL_SERVED => COLOR_WELL_SERVED,
        _ => COLOR_NEUTRAL,
    }
}

const POSITION_TOKENS: [&str; 9] = [
    "top-left",
    "top-center",
    "top-right",
    "center-left",
    "center",
    "center-right",
    "bottom-left",
    "bottom-center",
    "bottom-right",
];

/// CSS positioning class for a recommendation's image region. Tokens we
/// have no class for land in the center rather than off-canvas.
pub fn marker_position_class(token: &str) -> String {
    if POSITION_TOKENS.contains(&token) {
        format!("marker-{}", token)
    } else {
        "marker-center".to_string()
    }
}

/// The recommendations panel only exists for an underserved verdict that
/// actually carries recommendations; an empty or missing list renders
/// nothing rather than an empty panel.
pub fn show_recommendations(result: &AnalysisResult) -> bool {
    result.is_underserved()
        && result
            .recommendations
            .as_ref()
            .is_some_and(|recs| !recs.is_empty())
}

/// One marker/card pair, joined by ordinal index. `label` is what the user
/// sees on both halves (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCard {
    pub index: usize,
    pub label: usize,
    pub position_class: String,
    pub name: String,
    pub reason: String,
}

pub fn marker_cards(result: &AnalysisResult) -> Vec<MarkerCard> {
    if !show_recommendations(result) {
        return Vec::new();
    }
    result
        .recommendations
        .as_ref()
        .map(|recs| {
            recs.iter()
                .enumerate()
                .map(|(index, rec)| MarkerCard {
                    index,
                    label: index + 1,
                    position_class: marker_position_class(&rec.location_on_image),
                    name: rec.name.clone(),
                    reason: rec.reason.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Hover-state transition for the marker/card pair at `index`. A single
/// Option models the highlight, so re-entering an already highlighted pair
/// is a no-op and leaving never clears a different pair's highlight.
pub fn hover_transition(current: Option<usize>, index: usize, entering: bool) -> Option<usize> {
    if entering {
        Some(index)
    } else if current == Some(index) {
        None
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Recommendation, Score};

    fn result(status: &str, recs: Option<Vec<Recommendation>>) -> AnalysisResult {
        AnalysisResult {
            status: status.to_string(),
            greenery_score: Score::Number(5.0),
            justification: "test".to_string(),
            recommendations: recs,
        }
    }

    fn rec(token: &str) -> Recommendation {
        Recommendation {
            name: format!("Site at {}", token),
            reason: "open land".to_string(),
            location_on_image: token.to_string(),
        }
    }

    #[test]
    fn color_mapping_is_total() {
        assert_eq!(status_color("Underserved"), COLOR_UNDERSERVED);
        assert_eq!(status_color("Adequate"), COLOR_ADEQUATE);
        assert_eq!(status_color("Well-Served"), COLOR_WELL_SERVED);
        assert_eq!(status_color("Unknown-Value"), COLOR_NEUTRAL);
        assert_eq!(status_color(""), COLOR_NEUTRAL);
    }

    #[test]
    fn well_served_without_recommendations_shows_no_panel() {
        let r = result("Well-Served", None);
        assert!(!show_recommendations(&r));
        assert!(marker_cards(&r).is_empty());
        assert_eq!(status_color(&r.status), COLOR_WELL_SERVED);
    }

    #[test]
    fn underserved_without_recommendations_shows_no_panel() {
        assert!(!show_recommendations(&result("Underserved", None)));
        assert!(!show_recommendations(&result("Underserved", Some(vec![]))));
    }

    #[test]
    fn recommendations_on_other_statuses_are_ignored() {
        let r = result("Adequate", Some(vec![rec("center")]));
        assert!(!show_recommendations(&r));
        assert!(marker_cards(&r).is_empty());
    }

    #[test]
    fn three_recommendations_yield_three_linked_pairs() {
        let r = result(
            "Underserved",
            Some(vec![rec("top-left"), rec("center"), rec("bottom-right")]),
        );
        let cards = marker_cards(&r);
        assert_eq!(cards.len(), 3);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.index, i);
            assert_eq!(card.label, i + 1);
        }
        assert_eq!(cards[0].position_class, "marker-top-left");
        assert_eq!(cards[1].position_class, "marker-center");
        assert_eq!(cards[2].position_class, "marker-bottom-right");
    }

    #[test]
    fn unknown_position_token_falls_back_to_center() {
        assert_eq!(marker_position_class("somewhere-else"), "marker-center");
        assert_eq!(marker_position_class("top-right"), "marker-top-right");
    }

    #[test]
    fn hover_highlights_one_index_at_a_time() {
        let mut state = None;
        state = hover_transition(state, 1, true);
        assert_eq!(state, Some(1));

        // Rapid movement: entering another pair moves the highlight.
        state = hover_transition(state, 2, true);
        assert_eq!(state, Some(2));

        // A stale unhover from the previous pair must not clear it.
        state = hover_transition(state, 1, false);
        assert_eq!(state, Some(2));

        state = hover_transition(state, 2, false);
        assert_eq!(state, None);

        // Unhover with nothing highlighted stays quiet.
        assert_eq!(hover_transition(None, 0, false), None);
    }
}
