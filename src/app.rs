//! Atlantis Site App
//!
//! Single-page layout: fixed header, stacked sections, bottom navigation.

use estate_core::SiteConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AboutSection, BottomNavigation, ContactSection, FeaturedProperties, FloatingWhatsApp, HeroSection,
    MetricsSection, PopularLocalities, ServicesSection, SiteFooter, SiteHeader, TestimonialsSection,
};
use crate::context::SiteContext;
use crate::store::SiteState;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let ctx = SiteContext::new(config);

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(SiteState::load()));

    // One scroll subscription drives header style and nav highlight
    leptos_viewport::use_scroll(move |sample| ctx.observe_scroll(sample));

    view! {
        <SiteHeader />
        <main class="site-main">
            <section id="hero">
                <HeroSection />
            </section>
            <section id="localities">
                <PopularLocalities />
            </section>
            <section id="metrics">
                <MetricsSection />
            </section>
            <section id="properties">
                <FeaturedProperties />
            </section>
            <section id="about">
                <AboutSection />
            </section>
            <section id="testimonials">
                <TestimonialsSection />
            </section>
            <section id="services">
                <ServicesSection />
            </section>
            <section id="contact">
                <ContactSection />
            </section>
            <SiteFooter />
        </main>
        <BottomNavigation />
        <FloatingWhatsApp />
    }
}
