use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"CANNIBAL"</A>
                <nav class="header__nav">
                    <A href="/" exact=true>"Home"</A>
                    <A href="/admin/orders">"Orders"</A>
                </nav>
            </div>
        </header>
    }
}
