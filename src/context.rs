//! Site Context
//!
//! Shared state provided via Leptos Context API: settings plus the
//! scroll-derived header and navigation state.

use estate_core::{active_section, is_scrolled, SectionBounds, SiteConfig};
use leptos::prelude::*;
use leptos_viewport::{element_extent, ScrollSample};

use crate::content::{DEFAULT_SECTION, TRACKED_SECTIONS};

/// Site-wide signals provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    /// Settings from site.json
    pub config: StoredValue<SiteConfig>,
    /// Section under the middle of the viewport - read
    pub active_section: ReadSignal<String>,
    /// Section under the middle of the viewport - write
    set_active_section: WriteSignal<String>,
    /// Header is past the scroll threshold - read
    pub is_scrolled: ReadSignal<bool>,
    /// Header is past the scroll threshold - write
    set_is_scrolled: WriteSignal<bool>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        let (active_section, set_active_section) = signal(DEFAULT_SECTION.to_string());
        let (is_scrolled, set_is_scrolled) = signal(false);
        Self {
            config: StoredValue::new(config),
            active_section,
            set_active_section,
            is_scrolled,
            set_is_scrolled,
        }
    }

    /// Recompute header and navigation state from one scroll sample
    pub fn observe_scroll(&self, sample: ScrollSample) {
        let threshold = self.config.with_value(|c| c.header_scroll_threshold);
        let scrolled = is_scrolled(sample.scroll_y, threshold);
        if self.is_scrolled.get_untracked() != scrolled {
            self.set_is_scrolled.set(scrolled);
        }

        let bounds: Vec<SectionBounds> = TRACKED_SECTIONS
            .iter()
            .filter_map(|id| element_extent(id).map(|(top, height)| SectionBounds::new(*id, top, height)))
            .collect();
        let active = active_section(&bounds, sample.scroll_y, sample.viewport_height, DEFAULT_SECTION);
        if self.active_section.with_untracked(|current| current != active) {
            self.set_active_section.set(active.to_string());
        }
    }
}

pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}
