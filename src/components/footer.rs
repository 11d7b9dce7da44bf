//! Site Footer Component

use leptos::prelude::*;

use crate::content::{FOOTER_LINKS, FOOTER_SERVICES};
use crate::context::use_site_context;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let ctx = use_site_context();
    let config = ctx.config.get_value();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>"ATLANTIS"</h3>
                    <p>
                        "Your trusted partner for premium real estate in Rourkela. "
                        "Waterfront homes, family villas and modern apartments."
                    </p>
                </div>

                <div class="footer-column">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {FOOTER_LINKS
                            .iter()
                            .map(|(label, id)| {
                                let id = *id;
                                view! {
                                    <li>
                                        <button
                                            class="footer-link"
                                            on:click=move |_| {
                                                leptos_viewport::scroll_to_id(id);
                                            }
                                        >
                                            {*label}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>"Services"</h4>
                    <ul>
                        {FOOTER_SERVICES.iter().map(|service| view! { <li>{*service}</li> }).collect_view()}
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>"Contact"</h4>
                    <p>"📍 " {config.office_address.clone()}</p>
                    <p>
                        <a href=config.phone_url()>"📞 " {config.phone_display.clone()}</a>
                    </p>
                    <p>"🕘 " {config.business_hours.clone()}</p>
                </div>
            </div>

            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", year, config.agency_name)}
            </div>
        </footer>
    }
}
