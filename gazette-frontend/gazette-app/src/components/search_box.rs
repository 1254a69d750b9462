use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gazette_api_types::search::SearchResult;
use gloo_timers::future::TimeoutFuture;
use icondata as i;
use leptos::{html::Div, prelude::*, task::spawn_local};
use leptos_icons::*;
#[cfg(feature = "hydrate")]
use leptos_use::on_click_outside;

use crate::api::search;
use crate::components::search_result::SearchResultList;

/// Trailing debounce window between the last keystroke and the request.
pub(crate) const DEBOUNCE_MS: u32 = 300;
/// Trimmed queries shorter than this never hit the network.
pub(crate) const MIN_QUERY_CHARS: usize = 2;

/// Monotonic generation counter shared between a search box and its in-flight
/// futures. A debounce timer or a response whose generation is no longer
/// current has been superseded by a newer keystroke and must not render.
#[derive(Clone, Debug, Default)]
pub(crate) struct QuerySequence(Arc<AtomicU64>);

impl QuerySequence {
    pub(crate) fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.0.load(Ordering::SeqCst) == generation
    }
}

pub(crate) fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn SearchBox(#[prop(into)] id: String) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let (query, set_query) = signal(String::new());
    let (open, set_open) = signal(false);
    // None until a response has been rendered. Some(vec![]) is a rendered
    // empty result set, which keeps the "no results" row re-showable on
    // focus, same as any other rendered dropdown content.
    let (results, set_results) = signal(Option::<Vec<SearchResult>>::None);
    let sequence = QuerySequence::default();

    Effect::new({
        let sequence = sequence.clone();
        move |_| {
            let raw = query.get();
            let generation = sequence.advance();
            let Some(q) = normalize_query(&raw) else {
                set_results.set(None);
                set_open.set(false);
                return;
            };
            let sequence = sequence.clone();
            spawn_local(async move {
                TimeoutFuture::new(DEBOUNCE_MS).await;
                if !sequence.is_current(generation) {
                    return;
                }
                match search(&q).await {
                    Ok(found) => {
                        // a newer query may have been issued while this one
                        // was in flight
                        if sequence.is_current(generation) {
                            set_results.set(Some(found));
                            set_open.set(true);
                        }
                    }
                    Err(e) => log::error!("search failed: {e}"),
                }
            });
        }
    });

    // listener is released when the component is cleaned up
    #[cfg(feature = "hydrate")]
    let _ = on_click_outside(container, move |_| set_open.set(false));

    let on_input = move |ev| set_query.set(event_target_value(&ev));
    let focus_in = move |_| {
        let has_rendered = results.with_untracked(|r| r.is_some());
        if has_rendered && query.with_untracked(|q| normalize_query(q).is_some()) {
            set_open.set(true);
        }
    };

    view! {
        <div class="relative w-full" node_ref=container>
            <div class="relative">
                <input
                    id=id
                    on:input=on_input
                    on:focusin=focus_in
                    placeholder="Search articles..."
                    class="input w-full pl-10"
                    type="text"
                    prop:value=query
                />
                <div class="absolute left-3 top-1/2 -translate-y-1/2 text-[color:var(--color-text-muted)]">
                    <Icon icon=i::AiSearchOutlined />
                </div>
            </div>
            <div
                class="absolute left-0 right-0 mt-2 z-50 rounded-xl overflow-hidden shadow-2xl max-h-96 overflow-y-auto bg-[color:var(--color-background-elevated)] border border-[color:var(--color-outline)]"
                class:hidden=move || !open.get()
            >
                {move || {
                    results
                        .get()
                        .map(|found| view! { <SearchResultList results=found /> })
                }}
            </div>
        </div>
    }
}
