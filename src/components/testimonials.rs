//! Testimonials Section Component
//!
//! Review carousel: one card on phones, three on wide screens. Rotates every
//! few seconds until the visitor navigates by hand.

use estate_core::{Carousel, CarouselLayout};
use leptos::prelude::*;
use leptos_viewport::{use_interval, use_viewport_width};

use crate::components::{SectionHeading, TestimonialCard};
use crate::content::REVIEW_STATS;
use crate::context::use_site_context;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let ctx = use_site_context();
    let store = use_site_store();
    let testimonials = StoredValue::new(store.testimonials().get_untracked());
    let count = testimonials.with_value(Vec::len);
    let has_testimonials = count > 0;

    let carousel = RwSignal::new(Carousel::new(count));
    let width = use_viewport_width();

    let period = ctx.config.with_value(|c| c.testimonial_interval_ms);
    let autoplaying = Memo::new(move |_| carousel.with(Carousel::is_autoplaying));
    use_interval(period, autoplaying.into(), move || {
        carousel.update(|c| {
            c.tick();
        });
    });

    let cards = move || {
        let slots = CarouselLayout::TESTIMONIALS.for_viewport(width.get());
        let window = carousel.with(|c| c.window(slots));
        let emphasise_centre = window.len() == 3;
        window
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                let testimonial = testimonials.with_value(|list| list[index].clone());
                let class = match (emphasise_centre, position) {
                    (true, 1) => "featured",
                    (true, _) => "dimmed",
                    _ => "",
                };
                view! { <TestimonialCard testimonial=testimonial class=class /> }
            })
            .collect_view()
    };

    let dots = move || {
        let current = carousel.with(Carousel::index);
        (0..count)
            .map(|index| {
                let class = if index == current { "carousel-dot active" } else { "carousel-dot" };
                view! {
                    <button
                        class=class
                        aria-label=format!("Show testimonial {}", index + 1)
                        on:click=move |_| carousel.update(|c| c.go_to(index))
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="section-container testimonials">
            <SectionHeading
                badge="Client Testimonials"
                title="What Our Clients"
                highlight="Say About Us"
                subtitle="Don't just take our word for it. Here's what our satisfied clients have to say about their experience with Atlantis Real Estate."
            />

            <div class="review-stats">
                {REVIEW_STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="review-stat">
                                <p class="review-stat-value">{*value}</p>
                                <p class="review-stat-label">{*label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || has_testimonials>
                <div class="testimonial-track">{cards}</div>

                <div class="carousel-controls">
                    <button class="carousel-arrow" aria-label="Previous" on:click=move |_| carousel.update(Carousel::prev)>
                        "‹"
                    </button>
                    <div class="carousel-dots">{dots}</div>
                    <button class="carousel-arrow" aria-label="Next" on:click=move |_| carousel.update(Carousel::next)>
                        "›"
                    </button>
                </div>

                <div class="autoplay-toggle">
                    <button on:click=move |_| carousel.update(Carousel::toggle_autoplay)>
                        {move || if autoplaying.get() { "Pause auto-rotation" } else { "Play auto-rotation" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
