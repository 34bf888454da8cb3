use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual tone of a counter card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTone {
    Neutral,
    Warning,
    Success,
    Error,
}

impl CardTone {
    fn css_class(&self) -> &'static str {
        match self {
            CardTone::Neutral => "stat-card",
            CardTone::Warning => "stat-card stat-card--warning",
            CardTone::Success => "stat-card stat-card--success",
            CardTone::Error => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    #[prop(into)]
    value: Signal<usize>,
    tone: CardTone,
    /// Highlighted when the card's filter is the active one
    #[prop(into)]
    active: Signal<bool>,
    on_click: Callback<()>,
) -> impl IntoView {
    let class = move || {
        if active.get() {
            format!("{} stat-card--active", tone.css_class())
        } else {
            tone.css_class().to_string()
        }
    };

    view! {
        <button class=class on:click=move |_| on_click.run(())>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </button>
    }
}
