//! Live-visitor dropdown for a project view.
//!
//! DESIGN
//! ======
//! Toggle-controlled panel, closed by default. Each open triggers one fetch
//! of current live-session metadata; the loading label only shows until the
//! first fetch resolves. Closing (outside click, close icon, or re-toggle)
//! hides the panel without clearing fetched data, so reopening shows stale
//! entries until the fresh fetch lands. Responses carry a ticket; a
//! superseded response is discarded instead of overwriting newer data.
//! Fetch failures are logged only.

#[cfg(test)]
#[path = "live_visitors_test.rs"]
mod live_visitors_test;

use leptos::prelude::*;

use crate::net::types::LiveVisitor;
use crate::util::requests::RequestSequence;

/// Stable list key for an entry; metadata rows have no id of their own.
fn entry_key(visitor: &LiveVisitor, index: usize) -> String {
    format!("{}{}{}{}{index}", visitor.dv, visitor.br, visitor.os, visitor.cc)
}

#[component]
pub fn LiveVisitorsDropdown(
    /// Project whose live sessions are listed.
    project_id: String,
    /// Password for password-protected projects.
    #[prop(optional)]
    project_password: Option<String>,
    /// Current live-visitor count supplied by the surrounding stats view.
    #[prop(into)]
    live: Signal<String>,
) -> impl IntoView {
    let show = RwSignal::new(false);
    let entries = RwSignal::new(Vec::<LiveVisitor>::new());
    let loading = RwSignal::new(true);
    let seq = RequestSequence::new();

    let root = NodeRef::<leptos::html::Div>::new();

    // Opening the panel triggers one fetch; closing does not clear data.
    Effect::new(move || {
        if !show.get() {
            return;
        }
        let ticket = seq.begin();
        #[cfg(feature = "hydrate")]
        {
            let project_id = project_id.clone();
            let project_password = project_password.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::live_visitors(&project_id, project_password.as_deref()).await
                {
                    Ok(list) => {
                        if ticket.is_current() {
                            let _ = entries.try_set(list);
                        }
                    }
                    Err(e) => log::warn!("live visitors fetch failed: {e}"),
                }
                if ticket.is_current() {
                    let _ = loading.try_set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, &project_id, &project_password);
    });

    // Close when a click lands outside the widget.
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::click, move |ev| {
            if !show.get_untracked() {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = match (root.get_untracked(), target) {
                (Some(el), Some(node)) => el.contains(Some(&node)),
                _ => false,
            };
            if !inside {
                show.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    }

    // Hoisted out of the view: the turbofish's `>` confuses the view macro.
    let each_entries = move || entries.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="live-visitors" node_ref=root>
            <p class="live-visitors__toggle" on:click=move |_| show.set(!show.get())>
                {move || live.get()}
                <span class="live-visitors__chevron">
                    {move || if show.get() { "▲" } else { "▼" }}
                </span>
            </p>
            <Show when=move || show.get()>
                <div class="live-visitors__panel">
                    <p class="live-visitors__title">"Live visitors"</p>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <p class="live-visitors__loading">"Loading..."</p> }
                    >
                        <For
                            each=each_entries
                            key=|(index, visitor)| entry_key(visitor, *index)
                            children=|(_, visitor)| {
                                view! {
                                    <div class="live-visitors__entry">
                                        <span class="live-visitors__flag">{visitor.cc.clone()}</span>
                                        <span>{visitor.os.clone()}</span>
                                        <span>{visitor.br.clone()}</span>
                                        <span class="live-visitors__device">
                                            {visitor.dv.clone()}
                                        </span>
                                        <span class="live-visitors__badge">"LIVE"</span>
                                    </div>
                                }
                            }
                        />
                    </Show>
                    <button
                        class="live-visitors__close"
                        on:click=move |_| show.set(false)
                    >
                        "✕"
                    </button>
                </div>
            </Show>
        </div>
    }
}
