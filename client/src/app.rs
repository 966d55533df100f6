//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{card_detail::CardDetailPage, main_page::MainPage};
use crate::state::cards::CardsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared card state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Starts in the loading state on both server and client so the first
    // hydrated render matches the SSR markup until the fetch lands.
    let cards = RwSignal::new(CardsState { loading: true, ..CardsState::default() });
    provide_context(cards);

    view! {
        <Stylesheet id="leptos" href="/pkg/staysafe.css"/>
        <Title text="StaySafe"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MainPage/>
                <Route path=StaticSegment("card") view=CardDetailPage/>
            </Routes>
        </Router>
    }
}
