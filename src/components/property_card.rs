//! Property Card Component
//!
//! One listing: image with status/type badges, price, specs and up to three
//! feature tags.

use estate_core::format::{feature_preview, format_price};
use estate_core::Property;
use leptos::prelude::*;

/// Feature tags shown before collapsing into "+N more"
const FEATURE_PREVIEW: usize = 3;

#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let status_class = if property.is_for_sale() {
        "badge badge-status sale"
    } else {
        "badge badge-status rent"
    };
    let (shown, hidden) = feature_preview(&property.features, FEATURE_PREVIEW);
    let feature_badges = shown
        .iter()
        .map(|feature| view! { <span class="badge badge-feature">{feature.clone()}</span> })
        .collect_view();

    view! {
        <article class="property-card">
            <div class="property-image">
                <img src=property.image.clone() alt=property.title.clone() loading="lazy" />
                <span class=status_class>{property.status.as_str()}</span>
                <span class="badge badge-type">{property.property_type.as_str().to_string()}</span>
            </div>

            <div class="property-body">
                <p class="property-price">{format_price(&property.price)}</p>
                <h3 class="property-title">{property.title.clone()}</h3>
                <p class="property-location">"📍 " {property.location.clone()}</p>

                <div class="property-specs">
                    <span>"🛏 " {property.bedrooms} " Beds"</span>
                    <span>"🛁 " {property.bathrooms} " Baths"</span>
                    <span>"📐 " {property.area.clone()}</span>
                </div>

                <div class="property-features">
                    {feature_badges}
                    {(hidden > 0).then(|| view! { <span class="badge badge-feature">"+" {hidden} " more"</span> })}
                </div>

                <button class="btn btn-primary btn-block">"View Property"</button>
            </div>
        </article>
    }
}
