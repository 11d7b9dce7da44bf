//! Popular Localities Component
//!
//! Auto-rotating neighbourhood tiles. Hovering holds the rotation; arrows
//! stop it for the rest of the visit.

use estate_core::{Carousel, CarouselLayout};
use leptos::prelude::*;
use leptos_viewport::{use_interval, use_viewport_width};

use crate::content::LOCALITIES;
use crate::context::use_site_context;

#[component]
pub fn PopularLocalities() -> impl IntoView {
    let ctx = use_site_context();
    let carousel = RwSignal::new(Carousel::new(LOCALITIES.len()));
    let (hovered, set_hovered) = signal(false);
    let width = use_viewport_width();

    let period = ctx.config.with_value(|c| c.locality_interval_ms);
    let running = Memo::new(move |_| carousel.with(Carousel::is_autoplaying) && !hovered.get());
    use_interval(period, running.into(), move || {
        carousel.update(|c| {
            c.tick();
        });
    });

    let visible = move || {
        let slots = CarouselLayout::LOCALITIES.for_viewport(width.get());
        carousel.with(|c| c.window(slots))
    };

    view! {
        <div class="section-container localities">
            <h2 class="localities-title">
                <span class="text-gradient">"Popular"</span>
                " Neighborhoods"
            </h2>

            <div
                class="localities-carousel"
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
            >
                <button class="carousel-arrow prev" aria-label="Previous" on:click=move |_| carousel.update(Carousel::prev)>
                    "‹"
                </button>
                <div class="locality-track">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|index| {
                                let locality = &LOCALITIES[index];
                                view! {
                                    <div class="locality-tile">
                                        <div class="locality-image">
                                            <img src=locality.image alt=locality.name loading="lazy" />
                                            <span class="locality-pin">"📍"</span>
                                        </div>
                                        <div class="locality-body">
                                            <h3>{locality.name}</h3>
                                            <p>{locality.description}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button class="carousel-arrow next" aria-label="Next" on:click=move |_| carousel.update(Carousel::next)>
                    "›"
                </button>
            </div>
        </div>
    }
}
