//! Login page: email + password against the auth API.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::state::form::FormStatus;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().busy {
            return;
        }
        let credentials = Credentials::new(email.get_untracked(), password.get_untracked());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let flow = crate::flow::AuthFlow::browser(&config, auth, move |route: &str| {
                navigate(route, NavigateOptions::default());
            });
            leptos::task::spawn_local(async move {
                flow.submit_login(&status, credentials).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, auth, &navigate, credentials, NavigateOptions::default());
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue to SpenDix"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label" for="login-email">"Email Address"</label>
                    <input
                        id="login-email"
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || status.with(|s| s.visible_error().is_some())>
                        <p class="auth-error">
                            {move || status.with(|s| s.visible_error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || status.with(|s| s.busy)>
                        {move || if status.with(|s| s.busy) { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
