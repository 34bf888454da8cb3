use crate::domain::a002_product::api::fetch_new_products;
use crate::shared::config::config;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use contracts::domain::a002_product::aggregate::{featured, Product};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let image = product.primary_image().unwrap_or_default().to_string();
    view! {
        <div class="product-card">
            <div class="product-card__image">
                <img src=image alt=product.name.clone() loading="lazy" />
                <div class="product-card__overlay">
                    <button class="button button--icon" aria-label="Add to cart">{icon("cart")}</button>
                </div>
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <span class="product-card__price">{format_money(product.price)}</span>
            </div>
        </div>
    }
}

/// Newest products; the built-in list stands in while loading or after a failure
#[component]
pub fn FeaturedProducts() -> impl IntoView {
    let fetched = RwSignal::new(None::<Vec<Product>>);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_new_products().await {
                Ok(items) => {
                    let _ = fetched.try_set(Some(items));
                }
                Err(e) => log::error!("Error fetching featured products: {}", e),
            }
        });
    });

    let products = move || {
        fetched.with(|items| featured(items.as_deref(), config().ui.featured_count))
    };

    view! {
        <section class="home-section featured">
            <div class="home-section__heading">
                <h2>"Featured Collection"</h2>
                <div class="home-section__rule"></div>
            </div>
            <div class="featured__grid">
                <For
                    each=products
                    key=|product| product.id.clone()
                    children=|product| view! { <ProductCard product=product /> }
                />
            </div>
        </section>
    }
}
