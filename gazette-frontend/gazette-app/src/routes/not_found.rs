use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Gazette" />
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center gap-6 p-4">
            <div class="text-5xl font-bold tracking-widest">"404"</div>
            <p class="text-lg text-[color:var(--color-text-muted)]">
                "The page you are looking for does not exist."
            </p>
            <a href="/" class="btn btn-primary px-8 py-3">
                "Back to the front page"
            </a>
        </div>
    }
}
