//! Signup page: name, email, password, and an optional profile photo.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::net::api::ImageFile;
use crate::net::types::SignUpForm;
use crate::state::auth::AuthState;
use crate::state::form::{FormStatus, SubmitPhase};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    // Browser `File` handles are not `Send`.
    let profile_image = RwSignal::new_local(None::<ImageFile>);
    let status = RwSignal::new(FormStatus::default());
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let on_pick_image = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let picked = input.files().and_then(|files| files.get(0)).map(ImageFile::from_file);
            profile_image.set(picked);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().busy {
            return;
        }
        let form = SignUpForm {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            profile_image: profile_image.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let flow = crate::flow::AuthFlow::browser(&config, auth, move |route: &str| {
                navigate(route, NavigateOptions::default());
            });
            leptos::task::spawn_local(async move {
                flow.submit_registration(&status, form).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, auth, &navigate, form, NavigateOptions::default());
        }
    };

    let button_label = move || {
        status.with(|s| match (s.busy, s.phase) {
            (true, SubmitPhase::Uploading) => "Uploading photo...",
            (true, _) => "Creating account...",
            (false, _) => "Create Account",
        })
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an Account"</h1>
                <p class="auth-card__subtitle">"Start tracking your expenses with SpenDix"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label" for="signup-photo">"Profile Photo (optional)"</label>
                    <input
                        id="signup-photo"
                        class="auth-input auth-input--file"
                        type="file"
                        accept="image/*"
                        on:change=on_pick_image
                    />
                    <Show when=move || profile_image.with(Option::is_some)>
                        <p class="auth-file">
                            {move || {
                                profile_image.with(|f| f.as_ref().map(|f| f.name().to_owned()).unwrap_or_default())
                            }}
                            <button class="auth-link" type="button" on:click=move |_| profile_image.set(None)>
                                "Remove"
                            </button>
                        </p>
                    </Show>
                    <label class="auth-label" for="signup-name">"Full Name"</label>
                    <input
                        id="signup-name"
                        class="auth-input"
                        type="text"
                        autocomplete="name"
                        placeholder="John Doe"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <label class="auth-label" for="signup-email">"Email Address"</label>
                    <input
                        id="signup-email"
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-label" for="signup-password">"Password"</label>
                    <input
                        id="signup-password"
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
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
                        {button_label}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}
