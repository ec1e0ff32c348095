//! Page footer with full and minimal variants.
//!
//! The full variant carries marketing navigation and the latest blog post,
//! fetched once per mount with stale-result protection. App-chrome pages
//! (dashboard, settings, project views) get the reduced variant instead.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::LastPost;
use crate::util::page_meta::SITE_NAME;

/// Absolute URL for a blog post path.
fn blog_post_href(blog_base: &str, url_path: &str) -> String {
    let base = blog_base.trim_end_matches('/');
    let path = url_path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[component]
pub fn Footer(
    #[prop(into)] minimal: Signal<bool>,
    #[prop(into)] authenticated: Signal<bool>,
) -> impl IntoView {
    let last_post = RwSignal::new(None::<LastPost>);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::requests::RequestSequence;

        let seq = RequestSequence::new();
        let ticket = seq.begin();
        leptos::task::spawn_local(async move {
            match crate::net::api::last_post().await {
                Ok(post) => {
                    if ticket.is_current() {
                        let _ = last_post.try_set(Some(post));
                    }
                }
                Err(e) => log::warn!("last blog post fetch failed: {e}"),
            }
        });
        // Teardown invalidates the mount ticket so a late response is dropped.
        on_cleanup(move || {
            let _ = seq.begin();
        });
    }

    let blog_link = move || {
        last_post.get().map(|post| {
            let href = blog_post_href(&crate::util::env::load().blog_url, &post.url_path);
            view! {
                <a class="site-footer__blog" href=href target="_blank" rel="noreferrer">
                    {post.title}
                </a>
            }
        })
    };

    view! {
        <Show
            when=move || !minimal.get()
            fallback=|| {
                view! {
                    <footer class="site-footer site-footer--minimal">
                        <span>{format!("© {SITE_NAME}")}</span>
                        // `.into_any()` erases the `attr:`-augmented opaque
                        // component type, which rustc cannot prove `'static`.
                        {view! { <A href="/contact" attr:class="site-footer__link">"Contact"</A> }
                            .into_any()}
                    </footer>
                }
            }
        >
            <footer class="site-footer">
                <div class="site-footer__nav">
                    {view! { <A href="/" attr:class="site-footer__link">"Home"</A> }.into_any()}
                    <Show
                        when=move || authenticated.get()
                        fallback=|| {
                            view! {
                                <A href="/signin" attr:class="site-footer__link">"Sign in"</A>
                            }
                                .into_any()
                        }
                    >
                        {view! {
                            <A href="/dashboard" attr:class="site-footer__link">"Dashboard"</A>
                        }
                            .into_any()}
                    </Show>
                    {view! { <A href="/contact" attr:class="site-footer__link">"Contact"</A> }
                        .into_any()}
                </div>
                <div class="site-footer__meta">
                    {blog_link}
                    <span>{format!("© {SITE_NAME} · privacy-friendly web analytics")}</span>
                </div>
            </footer>
        </Show>
    }
}
