//! Route-guard wrapper component.
//!
//! Evaluates the guard predicate before constructing the protected view, so
//! guarded content never renders for the wrong audience, not even for one
//! frame before a redirect effect runs.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, GuardKind, guard_decision};

/// Wraps a page in an auth guard. `Hold` (bootstrap pending) renders
/// nothing; a failed predicate renders a router redirect instead of the
/// children.
#[component]
pub fn Guarded(kind: GuardKind, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| guard_decision(&auth.get(), kind));

    view! {
        {move || match decision.get() {
            GuardDecision::Allow => children().into_any(),
            GuardDecision::Hold => ().into_any(),
            GuardDecision::Redirect => {
                view! { <Redirect path=kind.redirect_target().to_owned()/> }.into_any()
            }
        }}
    }
}
