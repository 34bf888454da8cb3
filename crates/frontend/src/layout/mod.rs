pub mod footer;
pub mod header;
pub mod notifications;

use footer::Footer;
use header::Header;
use leptos::prelude::*;
use notifications::ToastContainer;

/// Page chrome shared by every route.
///
/// ```text
/// +-----------------------------+
/// |           Header            |
/// +-----------------------------+
/// |           content           |
/// +-----------------------------+
/// |           Footer            |
/// +-----------------------------+
/// ```
/// Toasts float above everything.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
            <ToastContainer />
        </div>
    }
}
