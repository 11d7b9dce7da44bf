//! About Section Component

use leptos::prelude::*;
use leptos_viewport::Reveal;

use crate::components::SectionHeading;
use crate::content::VALUES;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <div class="section-container about">
            <SectionHeading
                badge="About Atlantis"
                title="Luxury"
                highlight="Redefined"
                subtitle="15+ years of excellence in waterfront properties and premium homes."
            />

            <div class="about-grid">
                <Reveal class="about-copy">
                    <h3>"Redefining Luxury Living"</h3>
                    <p>
                        "Atlantis brings a boutique approach to Rourkela real estate. We walk every property we list, "
                        "verify every document, and stay with you from the first visit to the final handover."
                    </p>
                    <ul class="value-list">
                        {VALUES
                            .iter()
                            .map(|(title, description)| {
                                view! {
                                    <li>
                                        <h4>"✓ " {*title}</h4>
                                        <p>{*description}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Reveal>

                <Reveal class="about-visual" delay_ms=150>
                    <img
                        src="https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?auto=format&fit=crop&w=1200&q=80"
                        alt="Waterfront home in Rourkela"
                        loading="lazy"
                    />
                    <div class="experience-badge">
                        <span class="experience-value">"15+"</span>
                        <span class="experience-label">"Years of Excellence"</span>
                    </div>
                </Reveal>
            </div>
        </div>
    }
}
