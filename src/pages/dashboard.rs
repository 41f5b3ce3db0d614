//! Dashboard placeholder: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and signup navigate here on success. The page greets the current
//! user and offers logout; anonymous visitors are sent back to the login
//! route once session restore has settled.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let navigate_login = navigate.clone();
    let login_route = config.login_route.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate_login(&login_route, NavigateOptions::default());
        }
    });

    let display_name = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .and_then(|user| user.str_field("fullName").map(str::to_owned))
                .unwrap_or_else(|| "there".to_owned())
        })
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            crate::flow::AuthFlow::browser(&config, auth, move |route: &str| {
                navigate(route, NavigateOptions::default());
            })
            .logout();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate);
        }
    };

    view! {
        <Show
            when=move || auth.with(|state| !state.loading && state.user.is_some())
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.with(|s| s.loading) { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <span class="dashboard-page__greeting">"Hello, " {display_name}</span>
                    <button class="auth-button dashboard-page__logout" type="button" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </header>
            </div>
        </Show>
    }
}
