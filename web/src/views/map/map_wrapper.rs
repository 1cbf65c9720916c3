use leptos::{prelude::*, task::spawn_local};
use thaw::{Spinner, SpinnerSize};

use crate::{
    components::{error::ErrorView, loading::LoadingView},
    server::{analyze_area, get_static_map_url},
    utils::handoff,
    views::map::map_renderer::MapRenderer,
};
use shared_types::MapBounds;

/// In-flight transition for the analyze action: at most one request may be
/// outstanding, so starting is only permitted when none is. The disabled
/// button keeps the user from clicking; this keeps a second POST from ever
/// going out regardless.
fn begin_analysis(in_flight: bool) -> bool {
    !in_flight
}

/// Owns the selection flow: the map, the pending snapshot and the analysis
/// request. Exactly one snapshot is pending at a time; a new capture
/// silently replaces the previous one.
#[component]
pub fn AreaSelector() -> impl IntoView {
    let selection = RwSignal::new(Option::<MapBounds>::None);
    let show_labels = RwSignal::new(false);
    let tip_dismissed = RwSignal::new(false);
    let analyzing = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    // The snapshot URL is built server-side so the API key stays there.
    let snapshot = Resource::new(
        move || selection.get(),
        move |selection| async move {
            match selection {
                Some(bounds) => Some(get_static_map_url(bounds).await),
                None => None,
            }
        },
    );

    let on_area_captured = move |bounds: MapBounds| {
        tip_dismissed.set(true);
        error_message.set(None);
        selection.set(Some(bounds));
    };

    let on_analyze = move |image_url: String| {
        if !begin_analysis(analyzing.get_untracked()) {
            return;
        }
        analyzing.set(true);
        error_message.set(None);

        spawn_local(async move {
            match analyze_area(image_url.clone()).await {
                Ok(result) => match handoff::write(&result, &image_url) {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/results");
                        }
                    }
                    Err(e) => {
                        leptos::logging::error!("Failed to store analysis: {}", e);
                        error_message.set(Some(
                            "The analysis finished but could not be stored for the results page."
                                .to_string(),
                        ));
                        analyzing.set(false);
                    }
                },
                Err(e) => {
                    leptos::logging::error!("Analysis failed: {:?}", e);
                    error_message.set(Some(format!("Analysis failed: {}", e)));
                    analyzing.set(false);
                }
            }
        });
    };

    view! {
        <div class="selector-content">
            <div class="map-panel">
                {move || (!tip_dismissed.get()).then(|| view! {
                    <div class="usage-tip">
                        "Pan and zoom to frame a neighborhood, then press \"Capture this area\"."
                    </div>
                })}

                <MapRenderer show_labels=show_labels on_area_captured=on_area_captured/>

                <label class="labels-toggle">
                    <input
                        type="checkbox"
                        on:change=move |ev| show_labels.set(event_target_checked(&ev))
                        checked=move || show_labels.get()
                    />
                    " Show place labels"
                </label>
            </div>

            {move || match snapshot.get() {
                Some(Some(Ok(image_url))) => {
                    let on_analyze = on_analyze.clone();
                    let src = image_url.clone();
                    view! {
                        <div class="output-container">
                            <h2>"Selected area"</h2>
                            <img
                                class="static-map-image"
                                src=src
                                alt="Captured satellite snapshot"
                            />
                            <div class="analyze-row">
                                <button
                                    class="analyze-btn"
                                    disabled=move || analyzing.get()
                                    on:click=move |_| on_analyze(image_url.clone())
                                >
                                    {move || if analyzing.get() { "Analyzing..." } else { "Analyze Area" }}
                                </button>
                                {move || analyzing.get().then(|| view! {
                                    <Spinner size=SpinnerSize::Small />
                                })}
                            </div>
                            {move || error_message.get().map(|msg| view! {
                                <ErrorView message=Some(msg) />
                            })}
                        </div>
                    }.into_any()
                }
                Some(Some(Err(e))) => view! {
                    <div class="output-container">
                        <ErrorView message=Some(format!("Could not build the snapshot: {}", e)) />
                    </div>
                }.into_any(),
                None if selection.get().is_some() => view! {
                    <LoadingView message=Some("Preparing snapshot...".to_string()) />
                }.into_any(),
                _ => view! {
                    <div class="output-container" style="display: none;"></div>
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_analysis_cannot_start_while_one_is_in_flight() {
        assert!(begin_analysis(false));

        // While the first request is pending, nothing else may start.
        assert!(!begin_analysis(true));

        // Once it resolves, success or failure, a retry may start.
        assert!(begin_analysis(false));
    }
}
