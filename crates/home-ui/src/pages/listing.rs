use home_types::PropertySummary;
use leptos::prelude::*;

use crate::components::favorite::FavoriteState;
use crate::components::property_card::PropertyGrid;
use crate::components::toast::ToastContext;

#[component]
pub fn ListingPage() -> impl IntoView {
    let favorites = FavoriteState::new(expect_context::<ToastContext>());
    #[allow(unused_variables)]
    let (properties, setProperties) =
        signal(Option::<Result<Vec<PropertySummary>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        // Listing and favorites load independently.
        spawn_local(async move {
            let result = crate::server::get_properties()
                .await
                .map_err(|e| crate::server::error_text(&e));
            setProperties.set(Some(result));
        });
        favorites.load();
    }

    view! {
        <div class="dashboard-header">
            <h1>"Available listings"</h1>
            <p class="subtitle">"Properties currently on the market"</p>
        </div>
        {move || {
            match properties.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading listings..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load listings: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <PropertyGrid
                            properties=list
                            favorites=favorites
                            empty="No properties are listed right now."
                        />
                    }
                        .into_any()
                }
            }
        }}
    }
}
