//! Transient notification surface for the global error and alert slots.
//!
//! DESIGN
//! ======
//! Two independent observers, one per slot. A slot becoming non-empty
//! renders a dismissible toast; dismissal (or the auto-dismiss timeout)
//! clears only that slot. The slots are single-value with overwrite
//! semantics, so a second error before acknowledgment replaces the text
//! rather than queueing. Each write takes a fresh ticket so a superseded
//! message's timer cannot clear its replacement.

#[cfg(test)]
#[path = "alert_host_test.rs"]
mod alert_host_test;

use leptos::prelude::*;

use crate::state::alerts::AlertsState;
use crate::state::errors::ErrorsState;
use crate::util::requests::RequestSequence;

/// How long a toast stays up without user interaction.
pub const TOAST_TIMEOUT_MS: u32 = 8_000;

/// Toast element class for the error slot.
fn error_toast_class() -> String {
    "toast toast--error".to_owned()
}

/// Toast element class for the alert slot, by kind.
fn alert_toast_class(state: &AlertsState) -> String {
    format!("toast {}", state.kind.css_class())
}

#[component]
pub fn AlertHost() -> impl IntoView {
    let errors = expect_context::<RwSignal<ErrorsState>>();
    let alerts = expect_context::<RwSignal<AlertsState>>();

    let error_seq = RequestSequence::new();
    let alert_seq = RequestSequence::new();

    // Error-slot observer: schedule auto-dismiss for each new message.
    {
        let error_seq = error_seq.clone();
        Effect::new(move || {
            if errors.get().error.is_none() {
                return;
            }
            let ticket = error_seq.begin();
            #[cfg(feature = "hydrate")]
            gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || {
                if ticket.is_current() {
                    let _ = errors.try_update(ErrorsState::clear);
                }
            })
            .forget();
            #[cfg(not(feature = "hydrate"))]
            let _ = ticket;
        });
    }

    // Alert-slot observer, independent from the error slot.
    {
        let alert_seq = alert_seq.clone();
        Effect::new(move || {
            if alerts.get().message.is_none() {
                return;
            }
            let ticket = alert_seq.begin();
            #[cfg(feature = "hydrate")]
            gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || {
                if ticket.is_current() {
                    let _ = alerts.try_update(AlertsState::clear);
                }
            })
            .forget();
            #[cfg(not(feature = "hydrate"))]
            let _ = ticket;
        });
    }

    let on_error_dismiss = move |_| {
        let _ = error_seq.begin();
        errors.update(ErrorsState::clear);
    };
    let on_alert_dismiss = move |_| {
        let _ = alert_seq.begin();
        alerts.update(AlertsState::clear);
    };

    view! {
        <div class="toast-region">
            <Show when=move || errors.get().error.is_some()>
                <div class=error_toast_class() role="alert">
                    <p class="toast__text">
                        {move || errors.get().error.unwrap_or_default()}
                    </p>
                    <button class="toast__dismiss" on:click=on_error_dismiss.clone()>
                        "Dismiss"
                    </button>
                </div>
            </Show>
            <Show when=move || alerts.get().message.is_some()>
                <div class=move || alert_toast_class(&alerts.get()) role="status">
                    <p class="toast__text">
                        {move || alerts.get().message.unwrap_or_default()}
                    </p>
                    <button class="toast__dismiss" on:click=on_alert_dismiss.clone()>
                        "Dismiss"
                    </button>
                </div>
            </Show>
        </div>
    }
}
