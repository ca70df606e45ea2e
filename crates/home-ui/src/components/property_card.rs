use home_types::format::card_subtitle;
use home_types::PropertySummary;
use leptos::prelude::*;

use crate::components::favorite::{FavoriteButton, FavoriteState};

/// Listing card: cover image, title, `location - surface - price`, heart.
#[component]
pub fn PropertyCard(property: PropertySummary, favorites: FavoriteState) -> impl IntoView {
    let id = property.id;
    let href = format!("/properties/{id}");
    let subtitle = card_subtitle(&property.location, property.surface, property.price);
    let cover = property.cover_image().map(str::to_string);
    let title = property.title;

    view! {
        <div class="card property-card">
            <div class="property-cover">
                <a href=href.clone()>
                    {cover
                        .map(|src| {
                            let alt = title.clone();
                            view! { <img src=src alt=alt /> }
                        })}
                </a>
                <FavoriteButton id=id state=favorites />
            </div>
            <a href=href class="property-meta">
                <div class="card-title">{title.clone()}</div>
                <p class="property-subtitle">{subtitle}</p>
            </a>
        </div>
    }
}

/// Grid of cards, or an empty-state message.
#[component]
pub fn PropertyGrid(
    properties: Vec<PropertySummary>,
    favorites: FavoriteState,
    /// Shown when `properties` is empty
    empty: &'static str,
) -> impl IntoView {
    if properties.is_empty() {
        return view! {
            <div class="card empty-state">
                <p>{empty}</p>
            </div>
        }
            .into_any();
    }

    view! {
        <div class="property-grid">
            {properties
                .into_iter()
                .map(|property| view! { <PropertyCard property=property favorites=favorites /> })
                .collect_view()}
        </div>
    }
        .into_any()
}
