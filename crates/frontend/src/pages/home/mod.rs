//! Public storefront landing page

pub mod gallery;
pub mod newsletter;
pub mod reviews;

use self::gallery::FashionGallery;
use self::newsletter::Newsletter;
use self::reviews::Reviews;
use crate::domain::a002_product::ui::featured::FeaturedProducts;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__backdrop"></div>
            <div class="hero__content">
                <h1 class="hero__title">"CANNIBAL"</h1>
                <p class="hero__tagline">"Where bold meets unique. Define your style revolution."</p>
                <div class="hero__actions">
                    <a class="button button--light" href="#featured">
                        "Shop Collection "
                        {icon("chevron-right")}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BrandPhilosophy() -> impl IntoView {
    view! {
        <section class="philosophy">
            <h2>"Our Philosophy"</h2>
            <div class="home-section__rule home-section__rule--light"></div>
            <p>
                "At Cannibal, we believe in the power of self-expression through minimalist design and superior quality. "
                "Every piece tells a story of urban culture and contemporary lifestyle, crafted for those who dare to stand out."
            </p>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <div id="featured">
                <FeaturedProducts />
            </div>
            <FashionGallery />
            <BrandPhilosophy />
            <Reviews />
            <Newsletter />
        </div>
    }
}
