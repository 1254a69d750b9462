use leptos::prelude::*;

use crate::components::search_box::SearchBox;

#[component]
pub fn MainNav() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 border-b border-[color:var(--color-outline)] bg-[color:var(--color-background)]/90 backdrop-blur">
            <div class="flex items-center gap-4 p-3">
                <a class="nav-item font-bold text-lg" href="/">
                    "Gazette"
                </a>
                <a class="nav-item" href="/explore">
                    "Explore"
                </a>
                <div class="hidden md:block w-full max-w-md ml-auto">
                    <SearchBox id="search-desktop" />
                </div>
            </div>
            // narrow screens get their own box below the nav row
            <div class="p-3 pt-0 md:hidden">
                <SearchBox id="search-mobile" />
            </div>
        </header>
    }
}
