//! Section Heading Component
//!
//! Badge, two-tone title and optional lead paragraph shared by the sections.

use leptos::prelude::*;

#[component]
pub fn SectionHeading(
    #[prop(optional)] badge: Option<&'static str>,
    title: &'static str,
    highlight: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            {badge.map(|text| view! { <span class="badge badge-outline">{text}</span> })}
            <h2>
                {title}
                " "
                <span class="text-gradient">{highlight}</span>
            </h2>
            {subtitle.map(|text| view! { <p class="section-lead">{text}</p> })}
        </div>
    }
}
