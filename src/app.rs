//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignUpPage};
use crate::state::auth::AuthState;

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
/// Provides the auth session and API config contexts, restores a stored
/// session in the browser, and routes the auth screens and the dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::default();
    let auth = RwSignal::new(AuthState::restoring());

    provide_context(auth);
    provide_context(config.clone());

    #[cfg(feature = "hydrate")]
    {
        let flow = crate::flow::AuthFlow::browser(&config, auth, |_: &str| {});
        leptos::task::spawn_local(async move {
            flow.restore_session().await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/spendix.css"/>
        <Title text="SpenDix"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
            </Routes>
        </Router>
    }
}
