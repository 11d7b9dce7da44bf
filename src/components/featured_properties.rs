//! Featured Properties Component
//!
//! Filterable, paginated property catalog with grid/list layouts and a
//! "View All" switch that shows the whole filtered list.

use estate_core::{filter_properties, CatalogState, Property, PropertyFilter, ViewMode};
use leptos::prelude::*;

use crate::components::{PropertyCard, SectionHeading};
use crate::context::use_site_context;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn FeaturedProperties() -> impl IntoView {
    let ctx = use_site_context();
    let store = use_site_store();

    let catalog = RwSignal::new(CatalogState::new(ctx.config.with_value(|c| c.page_size)));
    let (view_mode, set_view_mode) = signal(ViewMode::Grid);

    let filtered_len = Memo::new(move |_| {
        let filter = catalog.with(|c| c.filter);
        let properties = store.properties().read();
        let count = filter_properties(&properties, filter).len();
        count
    });

    let visible = Memo::new(move |_| {
        let state = catalog.get();
        let properties = store.properties().read();
        let shown: Vec<Property> = state.visible(&properties).into_iter().cloned().collect();
        shown
    });

    let select_filter = move |filter: PropertyFilter| {
        catalog.update(|c| c.set_filter(filter));
    };

    let reveal_all = move |_| {
        log::info!("[Catalog] showing all {} properties", filtered_len.get_untracked());
        catalog.update(CatalogState::reveal_all);
    };

    let page_buttons = move || {
        let pages = catalog.with(|c| c.pages(filtered_len.get()));
        let current = catalog.with(|c| c.effective_page(filtered_len.get()));
        (0..pages)
            .map(|page| {
                let class = if page == current { "page-btn active" } else { "page-btn" };
                view! {
                    <button
                        class=class
                        on:click=move |_| catalog.update(|c| c.go_to_page(page, filtered_len.get_untracked()))
                    >
                        {page + 1}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="section-container">
            <SectionHeading
                badge="Featured Properties"
                title="Discover Your"
                highlight="Perfect Home"
                subtitle="Explore our curated collection of premium properties in Rourkela's most desirable locations. From luxury waterfront villas to modern apartments, find your ideal living space."
            />

            <div class="catalog-toolbar">
                <div class="filter-row">
                    {PropertyFilter::ALL
                        .iter()
                        .map(|filter| {
                            let filter = *filter;
                            let is_active = move || catalog.with(|c| c.filter == filter);
                            view! {
                                <button
                                    class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                    on:click=move |_| select_filter(filter)
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="view-toggle">
                    <button
                        class=move || if view_mode.get() == ViewMode::Grid { "toggle-btn active" } else { "toggle-btn" }
                        aria-label="Grid view"
                        on:click=move |_| set_view_mode.set(ViewMode::Grid)
                    >
                        "▦"
                    </button>
                    <button
                        class=move || if view_mode.get() == ViewMode::List { "toggle-btn active" } else { "toggle-btn" }
                        aria-label="List view"
                        on:click=move |_| set_view_mode.set(ViewMode::List)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <div class=move || match view_mode.get() {
                ViewMode::Grid => "property-grid",
                ViewMode::List => "property-grid list",
            }>
                <For
                    each=move || visible.get()
                    key=|property| property.id
                    children=move |property| view! { <PropertyCard property=property /> }
                />
            </div>

            <Show when=move || visible.with(Vec::is_empty)>
                <p class="empty-state">"No properties match this filter yet."</p>
            </Show>

            <Show when=move || catalog.with(|c| c.shows_page_controls(filtered_len.get()))>
                <div class="pagination">
                    <button
                        class="page-btn"
                        on:click=move |_| catalog.update(|c| c.prev_page(filtered_len.get_untracked()))
                    >
                        "‹ Previous"
                    </button>
                    <div class="page-numbers">{page_buttons}</div>
                    <button
                        class="page-btn"
                        on:click=move |_| catalog.update(|c| c.next_page(filtered_len.get_untracked()))
                    >
                        "Next ›"
                    </button>
                </div>
            </Show>

            <Show when=move || catalog.with(|c| c.shows_page_controls(filtered_len.get()))>
                <div class="catalog-cta">
                    <button class="btn btn-gold btn-lg" on:click=reveal_all>
                        "View All Properties"
                    </button>
                </div>
            </Show>
        </div>
    }
}
