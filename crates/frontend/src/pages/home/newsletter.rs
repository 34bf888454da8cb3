use crate::layout::notifications::use_notifications;
use crate::shared::icons::icon;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("instagram", "Instagram"),
    ("twitter", "Twitter"),
    ("facebook", "Facebook"),
];

/// Loose shape check: one `@`, something before it, a dotted domain after it
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[component]
pub fn Newsletter() -> impl IntoView {
    let notifications = use_notifications();
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = email.get_untracked();
        if is_valid_email(&value) {
            log::info!("Newsletter signup submitted");
            notifications.success("Thanks for subscribing!");
            email.set(String::new());
        } else {
            notifications.error("Please enter a valid email address");
        }
    };

    view! {
        <section class="home-section newsletter">
            <h2>"Join Our Community"</h2>
            <p class="newsletter__text">
                "Subscribe to get exclusive offers, early access to new collections, and style inspiration."
            </p>
            <form class="newsletter__form" on:submit=on_submit>
                <input
                    class="form__input newsletter__input"
                    type="email"
                    placeholder="Your email address"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button type="submit" class="button button--dark">"Subscribe"</button>
            </form>
            <div class="newsletter__social">
                {SOCIAL_LINKS
                    .iter()
                    .map(|(name, label)| {
                        view! {
                            <a href="#" class="newsletter__social-link" aria-label=*label>
                                {icon(name)}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("  ann.perera@mail.co.uk "));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ann"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ann@example"));
        assert!(!is_valid_email("ann@.com"));
        assert!(!is_valid_email("ann@ex@ample.com"));
        assert!(!is_valid_email("ann perera@example.com"));
    }
}
