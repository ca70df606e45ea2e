use home_types::PropertySummary;
use leptos::prelude::*;

use crate::components::favorite::FavoriteState;
use crate::components::property_card::PropertyGrid;
use crate::components::toast::ToastContext;

/// The user's saved properties. Cards disappear as soon as they are unfavorited.
#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = FavoriteState::new(expect_context::<ToastContext>());
    #[allow(unused_variables)]
    let (saved, setSaved) =
        signal(Option::<Result<Option<Vec<PropertySummary>>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = crate::server::get_favorites()
                .await
                .map_err(|e| crate::server::error_text(&e));
            if let Ok(list) = &result {
                favorites.seed(list.as_deref());
            }
            setSaved.set(Some(result));
        });
    }

    view! {
        <div class="dashboard-header">
            <h1>"My favorites"</h1>
            <p class="subtitle">"Properties you have saved"</p>
        </div>
        {move || {
            match saved.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading favorites..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load favorites: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(None)) => {
                    view! {
                        <div class="card empty-state">
                            <p>
                                <a href="/login">"Log in"</a>
                                " to see your favorites."
                            </p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(Some(list))) => {
                    let remaining: Vec<PropertySummary> = list
                        .into_iter()
                        .filter(|p| favorites.is_favorite(p.id))
                        .collect();
                    view! {
                        <PropertyGrid
                            properties=remaining
                            favorites=favorites
                            empty="You have not saved any property yet."
                        />
                    }
                        .into_any()
                }
            }
        }}
    }
}
