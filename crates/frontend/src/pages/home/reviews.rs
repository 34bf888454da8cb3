use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub name: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

pub const REVIEWS: [Review; 3] = [
    Review {
        name: "Alex Thompson",
        avatar: "https://i.pravatar.cc/150?img=11",
        rating: 5,
        text: "The quality of these clothes is exceptional. Every piece I've purchased has become a staple in my wardrobe.",
    },
    Review {
        name: "Jamie Lee",
        avatar: "https://i.pravatar.cc/150?img=5",
        rating: 5,
        text: "I love how unique these designs are! I always get compliments when wearing Cannibal clothing.",
    },
    Review {
        name: "Sam Richards",
        avatar: "https://i.pravatar.cc/150?img=8",
        rating: 4,
        text: "Fast shipping and the fit is perfect. The attention to detail in each garment is impressive.",
    },
];

pub const MAX_RATING: u8 = 5;

/// Filled flags of the five rating stars
pub fn star_states(rating: u8) -> [bool; MAX_RATING as usize] {
    let mut stars = [false; MAX_RATING as usize];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = i < rating as usize;
    }
    stars
}

#[component]
pub fn Reviews() -> impl IntoView {
    view! {
        <section class="home-section reviews">
            <div class="home-section__heading">
                <h2>"What Our Customers Say"</h2>
                <div class="home-section__rule"></div>
            </div>
            <div class="reviews__grid">
                {REVIEWS
                    .iter()
                    .map(|review| {
                        view! {
                            <div class="review-card">
                                <div class="review-card__author">
                                    <img class="review-card__avatar" src=review.avatar alt=review.name />
                                    <div>
                                        <h3>{review.name}</h3>
                                        <div class="review-card__stars">
                                            {star_states(review.rating)
                                                .into_iter()
                                                .map(|filled| icon(if filled { "star" } else { "star-empty" }))
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </div>
                                </div>
                                <p class="review-card__text">{format!("\"{}\"", review.text)}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
