use leptos::prelude::*;

use crate::views::map::map_wrapper::AreaSelector;

/// Landing page: the satellite map, capture toolbar and analysis flow.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="selector-page">
            <div style="text-align: center; margin-bottom: 1rem;">
                <h1 style="font-size: 2.2rem; margin-bottom: 0.25rem;">"Verdant"</h1>
                <p style="font-size: 1.1rem; color: #666;">
                    "Find where your city needs more green"
                </p>
            </div>

            <AreaSelector/>
        </div>
    }
}
