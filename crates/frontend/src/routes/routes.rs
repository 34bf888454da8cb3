use crate::domain::a001_order::ui::list::OrderManage;
use crate::layout::Shell;
use crate::pages::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">"Page not found"</div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/admin/orders") view=OrderManage />
                </Routes>
            </Shell>
        </Router>
    }
}
