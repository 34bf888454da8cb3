use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <footer data-zone="footer" class="footer">
            <span>{format!("© {} Cannibal. All rights reserved.", year)}</span>
        </footer>
    }
}
