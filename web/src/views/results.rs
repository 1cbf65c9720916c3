use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared_types::AnalysisResult;

use crate::{
    components::loading::LoadingView,
    report,
    utils::handoff::{self, HandoffError},
};

/// Where the results page is in its lifecycle: waiting for the client to
/// read the handoff, nothing to show, or ready to render.
#[derive(Clone)]
enum ReportState {
    Loading,
    Missing,
    Ready(AnalysisResult, String),
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let state = RwSignal::new(ReportState::Loading);
    let navigate = use_navigate();

    // sessionStorage only exists in the browser, so the handoff is read
    // after hydration rather than during server rendering.
    Effect::new(move |_| match handoff::read() {
        Ok((result, image_url)) => state.set(ReportState::Ready(result, image_url)),
        Err(HandoffError::Parse(e)) => {
            leptos::logging::error!("Unreadable analysis handoff: {}", e);
            state.set(ReportState::Missing);
        }
        Err(_) => state.set(ReportState::Missing),
    });

    view! {
        <div class="results-page">
            <header class="results-header">
                <button
                    class="back-button"
                    on:click=move |_| navigate("/", Default::default())
                >
                    "← Analyze another area"
                </button>
                <h1>"Greenery Report"</h1>
            </header>

            {move || match state.get() {
                ReportState::Loading => view! {
                    <LoadingView message=Some("Loading your report...".to_string()) />
                }.into_any(),
                ReportState::Missing => view! {
                    <div class="no-data">
                        <p>"No analysis data found."</p>
                        <a href="/">"Go back and select an area"</a>
                    </div>
                }.into_any(),
                ReportState::Ready(result, image_url) => view! {
                    <ReportView result=result image_url=image_url />
                }.into_any(),
            }}
        </div>
    }
}

/// Renders one report: snapshot, status banner, score, justification and
/// (for underserved areas) the marker/card pairs with linked hover
/// highlighting.
#[component]
fn ReportView(result: AnalysisResult, image_url: String) -> impl IntoView {
    let highlighted = RwSignal::new(Option::<usize>::None);

    let cards = report::marker_cards(&result);
    let markers = cards.clone();
    let has_recommendations = !cards.is_empty();

    let status = result.status.clone();
    let banner_style = format!("background-color: {};", report::status_color(&result.status));
    let score = result.greenery_score.to_string();
    let justification = result.justification.clone();

    view! {
        <div class="result-content">
            <div class="image-panel">
                <div class="image-container">
                    <img
                        class="analyzed-image"
                        src=image_url
                        alt="Analyzed satellite snapshot"
                    />
                    {markers.into_iter().map(|card| {
                        let index = card.index;
                        view! {
                            <div
                                class=format!("marker {}", card.position_class)
                                class:highlight=move || highlighted.get() == Some(index)
                                on:mouseenter=move |_| highlighted
                                    .update(|h| *h = report::hover_transition(*h, index, true))
                                on:mouseleave=move |_| highlighted
                                    .update(|h| *h = report::hover_transition(*h, index, false))
                            >
                                {card.label}
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="report-panel">
                <div class="status-banner" style=banner_style>
                    {status}
                </div>
                <p class="score">
                    "Greenery score: "
                    <span class="score-value">{score}</span>
                </p>
                <p class="justification">{justification}</p>

                {has_recommendations.then(|| view! {
                    <div class="recommendations-container">
                        <h2>"Suggested park sites"</h2>
                        <div class="recommendations-list">
                            {cards.into_iter().map(|card| {
                                let index = card.index;
                                view! {
                                    <div
                                        class="recommendation-card"
                                        class:highlight=move || highlighted.get() == Some(index)
                                        on:mouseenter=move |_| highlighted
                                            .update(|h| *h = report::hover_transition(*h, index, true))
                                        on:mouseleave=move |_| highlighted
                                            .update(|h| *h = report::hover_transition(*h, index, false))
                                    >
                                        <h3>
                                            <span class="rec-number">{card.label}</span>
                                            " "
                                            {card.name}
                                        </h3>
                                        <p>{card.reason}</p>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
