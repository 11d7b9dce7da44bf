//! Testimonial Card Component

use estate_core::format::{format_review_date, rating_stars};
use estate_core::Testimonial;
use leptos::prelude::*;

#[component]
pub fn TestimonialCard(
    testimonial: Testimonial,
    /// Extra classes, e.g. emphasis for the centre card
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let (filled, empty) = rating_stars(testimonial.rating);
    let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(empty));

    view! {
        <article class=format!("testimonial-card {}", class)>
            <div class="quote-mark">"❝"</div>

            <div class="rating">
                <span class="stars">{stars}</span>
                <span class="rating-value">{format!("{}.0", testimonial.rating.min(5))}</span>
            </div>

            <blockquote>"\"" {testimonial.text.clone()} "\""</blockquote>

            <span class="badge badge-property">{testimonial.property.clone()}</span>

            <div class="testimonial-author">
                <img src=testimonial.avatar.clone() alt=testimonial.name.clone() loading="lazy" />
                <div>
                    <h4>{testimonial.name.clone()}</h4>
                    <p class="author-location">"📍 " {testimonial.location.clone()}</p>
                    <p class="author-date">"📅 " {format_review_date(&testimonial.date)}</p>
                </div>
            </div>
        </article>
    }
}
