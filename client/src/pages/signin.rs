//! Sign-in page: email/password form with an optional two-factor step.
//!
//! Validation is synchronous and recomputed on every change, but messages
//! only show after the first submission attempt. A sign-in rejection with a
//! plain server message funnels into the global error slot; two-factor
//! rejections stay on the dedicated field.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::auth::AuthState;
use crate::state::errors::ErrorsState;
use crate::util::tokens;
use crate::util::validator::{MIN_PASSWORD_CHARS, is_valid_email, is_valid_password};

const BAD_EMAIL_ERROR: &str = "Please provide a valid email address.";
const SHORT_PASSWORD_ERROR: &str = "The password has to consist of at least 8 characters.";
const INVALID_2FA_ERROR: &str = "The provided code is invalid or has expired.";

/// Field-level validation result for the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct FieldErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

impl FieldErrors {
    fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

fn validate_form(email: &str, password: &str) -> FieldErrors {
    FieldErrors {
        email: (!is_valid_email(email)).then_some(BAD_EMAIL_ERROR),
        password: (!is_valid_password(password)).then_some(SHORT_PASSWORD_ERROR),
    }
}

/// Field error for a failed two-factor submission. Plain string messages
/// from the server are shown as-is; structured errors are for the log only,
/// the user sees the generic message.
fn two_fa_field_error(err: &ApiError) -> String {
    err.message()
        .map_or_else(|| INVALID_2FA_ERROR.to_owned(), ToOwned::to_owned)
}

#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let errors_slot = expect_context::<RwSignal<ErrorsState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let dont_remember = RwSignal::new(false);
    let been_submitted = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let two_fa_required = RwSignal::new(false);
    let two_fa_code = RwSignal::new(String::new());
    let two_fa_error = RwSignal::new(None::<String>);

    let field_errors = Memo::new(move |_| validate_form(&email.get(), &password.get()));
    let shown_email_error = move || {
        been_submitted
            .get()
            .then(|| field_errors.get().email)
            .flatten()
    };
    let shown_password_error = move || {
        been_submitted
            .get()
            .then(|| field_errors.get().password)
            .flatten()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        been_submitted.set(true);
        if busy.get() || !field_errors.get().is_valid() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get();
            let password_value = password.get();
            let dont_remember_value = dont_remember.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value, dont_remember_value)
                    .await
                {
                    Ok(resp) if resp.two_fa_required => {
                        let _ = two_fa_required.try_set(true);
                    }
                    Ok(resp) => {
                        if let (Some(access), Some(refresh), Some(user)) =
                            (resp.access_token, resp.refresh_token, resp.user)
                        {
                            tokens::set_access_token(&access);
                            tokens::set_refresh_token(&refresh);
                            let _ = auth.try_update(|a| {
                                a.login_successful(user);
                                a.finish_loading();
                            });
                        } else {
                            log::error!("login response missing token pair");
                        }
                    }
                    Err(e) => {
                        if let Some(message) = e.message() {
                            let _ = errors_slot
                                .try_update(|s| s.set_error(message.to_owned()));
                        } else {
                            log::error!("sign-in failed: {e}");
                        }
                    }
                }
                let _ = busy.try_set(false);
            });
        }
    };

    let on_two_fa_input = move |ev| {
        two_fa_code.set(event_target_value(&ev));
        two_fa_error.set(None);
    };

    let on_two_fa_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            // The raw code value is sent as-is; the server owns validation.
            let code = two_fa_code.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_2fa(&code).await {
                    Ok(resp) => {
                        tokens::clear_session_tokens();
                        tokens::set_access_token(&resp.access_token);
                        tokens::set_refresh_token(&resp.refresh_token);
                        let _ = auth.try_update(|a| {
                            a.login_successful(resp.user);
                            a.finish_loading();
                        });
                    }
                    Err(e) => {
                        if e.message().is_none() {
                            log::error!("failed to authenticate with 2FA: {e}");
                        }
                        let _ = two_fa_error.try_set(Some(two_fa_field_error(&e)));
                    }
                }
                let _ = two_fa_code.try_set(String::new());
                let _ = busy.try_set(false);
            });
        }
    };

    let two_fa_form = move || {
        view! {
            <form class="auth-form" on:submit=on_two_fa_submit>
                <h2>"Two-factor authentication"</h2>
                <p class="auth-form__hint">
                    "Enter the code from your authenticator app to continue."
                </p>
                <label class="auth-form__field">
                    "Code"
                    <input
                        type="text"
                        placeholder="XXXXXX"
                        prop:value=move || two_fa_code.get()
                        on:input=on_two_fa_input
                        disabled=move || busy.get()
                    />
                </label>
                <Show when=move || two_fa_error.get().is_some()>
                    <p class="auth-form__error">
                        {move || two_fa_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <button type="submit" disabled=move || busy.get()>
                    "Continue"
                </button>
            </form>
        }
    };

    let signin_form = move || {
        view! {
            <form class="auth-form" on:submit=on_submit>
                <h2>"Sign in to your account"</h2>
                <label class="auth-form__field">
                    "Email"
                    <input
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || shown_email_error().is_some()>
                    <p class="auth-form__error">{move || shown_email_error().unwrap_or_default()}</p>
                </Show>
                <label class="auth-form__field">
                    "Password"
                    <input
                        type="password"
                        name="password"
                        placeholder=format!("At least {MIN_PASSWORD_CHARS} characters")
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || shown_password_error().is_some()>
                    <p class="auth-form__error">
                        {move || shown_password_error().unwrap_or_default()}
                    </p>
                </Show>
                <label class="auth-form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || dont_remember.get()
                        on:change=move |_| dont_remember.set(!dont_remember.get_untracked())
                    />
                    "Don't remember me"
                </label>
                <button type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
            </form>
        }
    };

    view! {
        <div class="auth-page">
            <Show when=move || two_fa_required.get() fallback=signin_form>
                {two_fa_form}
            </Show>
        </div>
    }
}
