use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container mx-auto p-4">
            <div class="text-3xl font-bold">"Find your next read"</div>
            <p class="text-[color:var(--color-text-muted)] mt-2">
                "Start typing in the search bar to look up articles by title."
            </p>
        </div>
    }
}
