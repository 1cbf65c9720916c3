use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page with a path back to the selector.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
            <h1 style="font-size: 4rem; margin: 0; color: #2d3748;">"404"</h1>
            <p style="font-size: 1.2rem; color: #4a5568; margin: 0;">
                "The page you're looking for doesn't exist."
            </p>
            <button
                on:click=move |_| navigate("/", Default::default())
                style="background: #4caf50; color: white; padding: 0.75rem 1.5rem; border-radius: 8px; border: none; font-size: 1rem; font-weight: 600; cursor: pointer;"
            >
                "Back to the map"
            </button>
        </div>
    }
}
