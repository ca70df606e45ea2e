use home_types::SessionStatus;
use leptos::prelude::*;

use crate::server::Logout;

#[component]
pub fn Nav() -> impl IntoView {
    let session = RwSignal::new(SessionStatus::Unknown);
    let logoutAction = ServerAction::<Logout>::new();

    // Re-queried after each completed logout: the redirect to `/` does not
    // remount the nav when it is already there.
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        Effect::new(move |_| {
            logoutAction.version().track();
            spawn_local(async move {
                if let Ok(present) = crate::server::has_session().await {
                    session.set(SessionStatus::from(present));
                }
            });
        });
    }

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-brand">
                <div class="brand-icon">"\u{2302}"</div>
                <span class="brand-text">"OhMyHome"</span>
            </a>
            <ul class="nav-links">
                <li class="nav-item">
                    <a href="/">"Listings"</a>
                </li>
                <li class="nav-item">
                    <a href="/favorites">"Favorites"</a>
                </li>
                <li class="nav-item">
                    {move || {
                        if session.get().is_present() {
                            view! {
                                <ActionForm action=logoutAction>
                                    <button type="submit" class="btn btn-link">
                                        "Log out"
                                    </button>
                                </ActionForm>
                            }
                                .into_any()
                        } else {
                            view! { <a href="/login">"Log in"</a> }.into_any()
                        }
                    }}
                </li>
            </ul>
        </nav>
    }
}
