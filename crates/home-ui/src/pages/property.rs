use home_types::format::{
    bedrooms_label, construction_year_label, floor_label, format_price, format_surface,
};
use home_types::{Property, PropertyId};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::favorite::{FavoriteButton, FavoriteState};
use crate::components::toast::ToastContext;

/// Wraps around in both directions.
fn step(index: usize, count: usize, forward: bool) -> usize {
    if count == 0 {
        return 0;
    }
    if forward {
        (index + 1) % count
    } else {
        (index + count - 1) % count
    }
}

#[component]
pub fn PropertyPage() -> impl IntoView {
    let params = use_params_map();
    let favorites = FavoriteState::new(expect_context::<ToastContext>());
    #[allow(unused_variables)]
    let (property, setProperty) = signal(Option::<Result<Property, String>>::None);

    #[allow(unused_variables)]
    let propertyId = move || {
        params
            .with(|p| p.get("id"))
            .and_then(|raw| raw.parse::<PropertyId>().ok())
    };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        Effect::new(move |_| match propertyId() {
            Some(id) => {
                setProperty.set(None);
                spawn_local(async move {
                    let result = crate::server::get_property(id)
                        .await
                        .map_err(|e| crate::server::error_text(&e));
                    setProperty.set(Some(result));
                });
            }
            None => setProperty.set(Some(Err("invalid property id".into()))),
        });
        favorites.load();
    }

    view! {
        {move || {
            match property.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading property..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load property: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(p)) => view! { <PropertyDetail property=p favorites=favorites /> }.into_any(),
            }
        }}
    }
}

#[component]
fn PropertyDetail(property: Property, favorites: FavoriteState) -> impl IntoView {
    let id = property.id;

    view! {
        <div class="property-detail">
            <Gallery images=property.images.clone() />

            <div class="detail-header">
                <h1>{property.title.clone()}</h1>
                <FavoriteButton id=id state=favorites />
            </div>
            <p class="subtitle">"\u{1F4CD} " {property.location.clone()}</p>

            <div class="tag-row">
                <span class="tag tag-green">{format_price(property.price)}</span>
                <span class="tag tag-blue">{format_surface(property.surface)}</span>
                <span class="tag tag-volcano">{bedrooms_label(property.bedrooms)}</span>
                <span class="tag tag-purple">{floor_label(property.floor)}</span>
                <span class="tag tag-geekblue">
                    {construction_year_label(property.construction_year)}
                </span>
            </div>

            <hr class="divider" />

            <div class="card">
                <div class="card-title">"About this property"</div>
                <p>{property.description.clone()}</p>
            </div>

            <div class="tag-row">
                {property.has_elevator.then(|| view! { <span class="tag tag-cyan">"Elevator"</span> })}
                {property.has_cellar.then(|| view! { <span class="tag tag-gold">"Cellar"</span> })}
                {(!property.kind.is_empty())
                    .then(|| view! { <span class="tag">{property.kind.clone()}</span> })}
            </div>

            <hr class="divider" />

            <button type="button" class="btn btn-primary">
                "Contact the agency"
            </button>
        </div>
    }
}

#[component]
fn Gallery(images: Vec<String>) -> impl IntoView {
    let count = images.len();
    if count == 0 {
        return view! { <div class="gallery gallery-empty">"No photos"</div> }.into_any();
    }

    let (index, setIndex) = signal(0usize);
    let current = move || images.get(index.get()).cloned().unwrap_or_default();

    view! {
        <div class="gallery">
            <img src=current alt=move || format!("Image {}", index.get() + 1) />
            {(count > 1)
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class="gallery-nav gallery-prev"
                            on:click=move |_| setIndex.update(|i| *i = step(*i, count, false))
                        >
                            "\u{2039}"
                        </button>
                        <button
                            type="button"
                            class="gallery-nav gallery-next"
                            on:click=move |_| setIndex.update(|i| *i = step(*i, count, true))
                        >
                            "\u{203A}"
                        </button>
                        <div class="gallery-counter">
                            {move || format!("{} / {count}", index.get() + 1)}
                        </div>
                    }
                })}
        </div>
    }
        .into_any()
}

#[cfg(test)]
mod tests {
    use super::step;

    #[test]
    fn gallery_wraps_both_ways() {
        assert_eq!(step(0, 3, true), 1);
        assert_eq!(step(2, 3, true), 0);
        assert_eq!(step(0, 3, false), 2);
        assert_eq!(step(1, 3, false), 0);
        assert_eq!(step(0, 0, true), 0);
    }
}
