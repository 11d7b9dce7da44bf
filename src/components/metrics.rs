//! Metrics Section Component

use leptos::prelude::*;
use leptos_viewport::Reveal;

use crate::content::METRICS;

#[component]
pub fn MetricsSection() -> impl IntoView {
    view! {
        <div class="section-container metrics">
            {METRICS
                .iter()
                .enumerate()
                .map(|(index, (glyph, value, label, description))| {
                    view! {
                        <Reveal class="metric-card" delay_ms={index as u32 * 100}>
                            <div class="metric-icon">{*glyph}</div>
                            <p class="metric-value">{*value}</p>
                            <p class="metric-label">{*label}</p>
                            <p class="metric-description">{*description}</p>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}
