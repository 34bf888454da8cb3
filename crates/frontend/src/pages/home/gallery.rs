use crate::shared::config::config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const GALLERY_IMAGES: [&str; 16] = [
    "https://i.ibb.co/bBsr0tH/DSC07648.png",
    "https://i.ibb.co/hWt5Ssc/DSC07653.png",
    "https://i.ibb.co/dDN5B2s/DSC07656.png",
    "https://i.ibb.co/yQ8HcsZ/DSC07600.png",
    "https://i.ibb.co/QJM0TMP/DSC07607.png",
    "https://i.ibb.co/HCjwQzC/DSC07612.png",
    "https://i.ibb.co/y03MQVW/DSC07627.png",
    "https://i.ibb.co/2Ff35RM/DSC07632.png",
    "https://i.ibb.co/YLXWMwG/DSC07633.png",
    "https://i.ibb.co/F4gsp42/DSC07639.png",
    "https://i.ibb.co/GMTnJZj/DSC07679.png",
    "https://i.ibb.co/6J7CCBd/DSC07714.png",
    "https://i.ibb.co/XDQ3xZ3/DSC07719.png",
    "https://i.ibb.co/Jq2HMP0/DSC07724.png",
    "https://i.ibb.co/R9CxSjw/DSC07733.png",
    "https://i.ibb.co/NW7C2X7/DSC07737.png",
];

pub const PAGE_SIZE: usize = 3;

/// Window of `step` consecutive images over a list of `len`.
///
/// Moving past either end wraps: forward to the start, backward to the last
/// full window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    index: usize,
    len: usize,
    step: usize,
}

impl GalleryCursor {
    pub fn new(len: usize, step: usize) -> Self {
        Self {
            index: 0,
            len,
            step: step.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = if self.index + self.step >= self.len {
            0
        } else {
            self.index + self.step
        };
    }

    pub fn prev(&mut self) {
        self.index = if self.index < self.step {
            self.len.saturating_sub(self.step)
        } else {
            self.index - self.step
        };
    }

    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.step)
    }

    pub fn active_page(&self) -> usize {
        self.index / self.step
    }

    pub fn go_to_page(&mut self, page: usize) {
        if page < self.page_count() {
            self.index = page * self.step;
        }
    }

    /// Slice of `items` currently shown
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.index.min(items.len());
        let end = (self.index + self.step).min(items.len());
        &items[start..end]
    }
}

#[component]
pub fn FashionGallery() -> impl IntoView {
    let cursor = RwSignal::new(GalleryCursor::new(GALLERY_IMAGES.len(), PAGE_SIZE));
    let paused = RwSignal::new(false);
    let interval = config().ui.gallery_interval_ms;

    // Auto-advance until the component is gone
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval).await;
            match paused.try_get_untracked() {
                None => break,
                Some(true) => continue,
                Some(false) => {
                    cursor.try_update(|c| c.next());
                }
            }
        }
    });

    let images = move || {
        cursor.with(|c| {
            let start = c.index();
            c.visible(&GALLERY_IMAGES[..])
                .iter()
                .enumerate()
                .map(|(i, src)| (start + i, *src))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="home-section gallery">
            <div class="home-section__heading">
                <h2>"Latest Collection"</h2>
                <div class="home-section__rule"></div>
            </div>
            <div class="gallery__viewport">
                <button
                    class="button button--icon gallery__nav gallery__nav--prev"
                    aria-label="Previous"
                    on:click=move |_| cursor.update(|c| c.prev())
                >
                    {icon("chevron-left")}
                </button>
                <div class="gallery__track">
                    <For
                        each=images
                        key=|(index, _)| *index
                        children=move |(index, src)| {
                            view! {
                                <div
                                    class="gallery__item"
                                    on:mouseenter=move |_| paused.set(true)
                                    on:mouseleave=move |_| paused.set(false)
                                >
                                    <img src=src alt=format!("Collection item {}", index + 1) loading="lazy" />
                                </div>
                            }
                        }
                    />
                </div>
                <button
                    class="button button--icon gallery__nav gallery__nav--next"
                    aria-label="Next"
                    on:click=move |_| cursor.update(|c| c.next())
                >
                    {icon("chevron-right")}
                </button>
            </div>
            <div class="gallery__dots">
                {move || {
                    let (pages, active) = cursor.with(|c| (c.page_count(), c.active_page()));
                    (0..pages)
                        .map(|page| {
                            let class = if page == active {
                                "gallery__dot gallery__dot--active"
                            } else {
                                "gallery__dot"
                            };
                            view! {
                                <button
                                    class=class
                                    aria-label=format!("Page {}", page + 1)
                                    on:click=move |_| cursor.update(|c| c.go_to_page(page))
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_start() {
        let mut cursor = GalleryCursor::new(16, 3);
        let mut seen = vec![cursor.index()];
        for _ in 0..5 {
            cursor.next();
            seen.push(cursor.index());
        }
        assert_eq!(seen, vec![0, 3, 6, 9, 12, 15]);
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last_full_window() {
        let mut cursor = GalleryCursor::new(16, 3);
        cursor.prev();
        assert_eq!(cursor.index(), 13);
        assert_eq!(cursor.visible(&GALLERY_IMAGES[..]).len(), 3);
        cursor.prev();
        assert_eq!(cursor.index(), 10);

        let mut short = GalleryCursor::new(2, 3);
        short.prev();
        assert_eq!(short.index(), 0);
    }

    #[test]
    fn test_pages() {
        let mut cursor = GalleryCursor::new(16, 3);
        assert_eq!(cursor.page_count(), 6);
        cursor.go_to_page(5);
        assert_eq!(cursor.index(), 15);
        assert_eq!(cursor.active_page(), 5);
        assert_eq!(cursor.visible(&GALLERY_IMAGES[..]), &GALLERY_IMAGES[15..]);
        cursor.go_to_page(9);
        assert_eq!(cursor.index(), 15);

        cursor.prev();
        assert_eq!(cursor.active_page(), 4);
    }
}
