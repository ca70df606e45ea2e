use home_types::{FavoriteSet, PropertyId, PropertySummary, SessionStatus, ToggleOutcome};
use leptos::prelude::*;

use crate::components::toast::ToastContext;

/// Page-local favorite state: the set itself plus what is known about the
/// session. Dropped with the page.
#[derive(Clone, Copy)]
pub struct FavoriteState {
    favorites: RwSignal<FavoriteSet>,
    session: RwSignal<SessionStatus>,
    toasts: ToastContext,
}

impl FavoriteState {
    pub fn new(toasts: ToastContext) -> Self {
        Self {
            favorites: RwSignal::new(FavoriteSet::new()),
            session: RwSignal::new(SessionStatus::Unknown),
            toasts,
        }
    }

    pub fn is_favorite(&self, id: PropertyId) -> bool {
        self.favorites.with(|set| set.contains(id))
    }

    /// Seeds from the `favorites/me` result. `None` means no session.
    pub fn seed(&self, favorites: Option<&[PropertySummary]>) {
        match favorites {
            Some(list) => {
                self.session.set(SessionStatus::Present);
                self.favorites.set(list.iter().map(|p| p.id).collect());
            }
            None => {
                self.session.set(SessionStatus::Absent);
                self.favorites.set(FavoriteSet::new());
            }
        }
    }

    /// Fetches the user's favorites on mount.
    pub fn load(&self) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let state = *self;
            spawn_local(async move {
                match crate::server::get_favorites().await {
                    Ok(list) => state.seed(list.as_deref()),
                    Err(e) => {
                        // a session cookie exists, the upstream call failed
                        state.session.set(SessionStatus::Present);
                        state.toasts.error(format!(
                            "Could not load favorites: {}",
                            crate::server::error_text(&e)
                        ));
                    }
                }
            });
        }
    }

    fn notify(&self, outcome: &ToggleOutcome) {
        if let Some(notice) = outcome.notice() {
            match outcome {
                ToggleOutcome::LoginRequired => self.toasts.warning(notice),
                _ => self.toasts.error(notice),
            }
        }
    }

    /// While the session is still unknown the server decides; it answers
    /// `LoginRequired` without calling upstream when there is no cookie.
    pub fn toggle(&self, id: PropertyId) {
        if !self.session.get_untracked().may_toggle() {
            self.notify(&ToggleOutcome::LoginRequired);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let state = *self;
            let wasFavorite = self.favorites.with_untracked(|set| set.contains(id));
            spawn_local(async move {
                let outcome = match crate::server::toggle_favorite(id, wasFavorite).await {
                    Ok(outcome) => outcome,
                    Err(e) => ToggleOutcome::Failed {
                        id,
                        message: crate::server::error_text(&e),
                    },
                };
                if let Some(status) = SessionStatus::after(&outcome) {
                    state.session.set(status);
                }
                state.favorites.update(|set| set.reconcile(&outcome));
                state.notify(&outcome);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

#[component]
pub fn FavoriteButton(id: PropertyId, state: FavoriteState) -> impl IntoView {
    let isFavorite = move || state.is_favorite(id);

    view! {
        <button
            type="button"
            class=move || if isFavorite() { "favorite-btn active" } else { "favorite-btn" }
            title=move || if isFavorite() { "Remove from favorites" } else { "Add to favorites" }
            on:click=move |_| state.toggle(id)
        >
            {move || if isFavorite() { "\u{2665}" } else { "\u{2661}" }}
        </button>
    }
}
