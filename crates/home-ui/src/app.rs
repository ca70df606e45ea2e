use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::favorites::FavoritesPage;
use crate::pages::listing::ListingPage;
use crate::pages::login::LoginPage;
use crate::pages::property::PropertyPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/home-console.css" />
        <Title text="OhMyHome" />
        <ToastProvider>
            <Router>
                <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                    <Route path=StaticSegment("") view=ListingView />
                    <Route
                        path=(StaticSegment("properties"), ParamSegment("id"))
                        view=PropertyView
                    />
                    <Route path=StaticSegment("favorites") view=FavoritesView />
                    <Route path=StaticSegment("login") view=LoginPage />
                </Routes>
            </Router>
        </ToastProvider>
    }
}

#[component]
fn ListingView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <ListingPage />
            </main>
        </div>
    }
}

#[component]
fn PropertyView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <PropertyPage />
            </main>
        </div>
    }
}

#[component]
fn FavoritesView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <FavoritesPage />
            </main>
        </div>
    }
}
