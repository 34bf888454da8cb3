use crate::layout::notifications::NotificationService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are raised from any page
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}
