pub mod api;
pub mod components;
pub mod error;
pub(crate) mod main_nav;
pub mod routes;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::main_nav::MainNav;
use crate::routes::{home_page::HomePage, not_found::NotFound};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/static/main.css" />
        <Title text="Gazette" />
        <Router>
            <MainNav />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
