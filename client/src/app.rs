//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, garden::GardenPage, login::LoginPage};
use crate::state::{auth::AuthState, garden::GardenState};

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
/// Provides shared state contexts, restores the stored session, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let garden = RwSignal::new(GardenState::default());

    provide_context(auth);
    provide_context(garden);

    // Restore the session once on the client. Reads no signals, so the
    // effect runs exactly once after hydration.
    Effect::new(move || {
        bootstrap_session(auth);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/horti.css"/>
        <Title text="Horti"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("garden"), ParamSegment("id")) view=GardenPage/>
            </Routes>
        </Router>
    }
}

/// Populate `AuthState` from the OAuth redirect or `localStorage`.
///
/// Expired or undecodable tokens are cleared so the user lands back on the
/// login page instead of hitting the API with a dead session.
#[cfg_attr(feature = "hydrate", allow(clippy::cast_possible_truncation))]
fn bootstrap_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::session;

        let token = session::capture_redirect_token().or_else(session::load_token);
        let restored = token.and_then(|token| {
            let claims = session::decode_claims(&token)?;
            Some((token, claims))
        });
        let now_secs = (js_sys::Date::now() / 1000.0) as i64;

        auth.update(|state| {
            state.loading = false;
            match restored {
                Some((token, claims)) if !session::claims_expired(&claims, now_secs) => {
                    state.token = Some(token);
                    state.user = Some(claims);
                }
                Some(_) => {
                    log::warn!("stored session token expired, clearing it");
                    session::clear_token();
                }
                None => {
                    session::clear_token();
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
