//! Reusable card component for garden list items on the dashboard.

use leptos::prelude::*;

/// A clickable card representing a garden in the dashboard list.
#[component]
pub fn GardenCard(
    id: String,
    name: String,
    description: Option<String>,
    width: f64,
    height: f64,
) -> impl IntoView {
    let href = format!("/garden/{id}");
    let dims = format!("{width:.0}×{height:.0}");

    view! {
        <a class="garden-card" href=href>
            <span class="garden-card__name">{name}</span>
            {description.map(|text| view! { <span class="garden-card__description">{text}</span> })}
            <span class="garden-card__dims">{dims}</span>
        </a>
    }
}
