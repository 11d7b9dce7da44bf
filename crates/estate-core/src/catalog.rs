//! Property Catalog State
//!
//! Filtering and pagination over the static property list. The rendered
//! slice is always a pure function of (list, filter, page, show_all).

use crate::domain::{Property, PropertyStatus, PropertyType};

/// Filter selector shown above the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyFilter {
    #[default]
    All,
    ForSale,
    ForRent,
    Villa,
    Apartment,
    Bungalow,
}

impl PropertyFilter {
    /// Filters in display order
    pub const ALL: [PropertyFilter; 6] = [
        PropertyFilter::All,
        PropertyFilter::ForSale,
        PropertyFilter::ForRent,
        PropertyFilter::Villa,
        PropertyFilter::Apartment,
        PropertyFilter::Bungalow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyFilter::All => "All Properties",
            PropertyFilter::ForSale => "For Sale",
            PropertyFilter::ForRent => "For Rent",
            PropertyFilter::Villa => "Villa",
            PropertyFilter::Apartment => "Apartment",
            PropertyFilter::Bungalow => "Bungalow",
        }
    }

    fn as_status(&self) -> Option<PropertyStatus> {
        match self {
            PropertyFilter::ForSale => Some(PropertyStatus::ForSale),
            PropertyFilter::ForRent => Some(PropertyStatus::ForRent),
            _ => None,
        }
    }

    fn as_type(&self) -> Option<PropertyType> {
        match self {
            PropertyFilter::Villa => Some(PropertyType::Villa),
            PropertyFilter::Apartment => Some(PropertyType::Apartment),
            PropertyFilter::Bungalow => Some(PropertyType::Bungalow),
            _ => None,
        }
    }

    /// A property matches by either axis: status OR type.
    pub fn matches(&self, property: &Property) -> bool {
        *self == PropertyFilter::All
            || self.as_status() == Some(property.status)
            || self.as_type().as_ref() == Some(&property.property_type)
    }
}

/// Grid or list layout for the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Matching properties in original order
pub fn filter_properties<'a>(properties: &'a [Property], filter: PropertyFilter) -> Vec<&'a Property> {
    properties.iter().filter(|p| filter.matches(p)).collect()
}

/// Number of pages needed for `len` items; zero for an empty list
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Catalog view state: active filter plus either a page cursor or show-all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogState {
    pub filter: PropertyFilter,
    pub page: usize,
    pub page_size: usize,
    /// Once set, the whole filtered list is shown until the filter changes
    pub show_all: bool,
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: PropertyFilter::All,
            page: 0,
            page_size: page_size.max(1),
            show_all: false,
        }
    }

    /// Select a filter; always resets the cursor and the show-all flag
    pub fn set_filter(&mut self, filter: PropertyFilter) {
        log::debug!("[Catalog] filter -> {}", filter.label());
        self.filter = filter;
        self.page = 0;
        self.show_all = false;
    }

    pub fn pages(&self, filtered_len: usize) -> usize {
        page_count(filtered_len, self.page_size)
    }

    pub fn next_page(&mut self, filtered_len: usize) {
        let pages = self.pages(filtered_len);
        if pages == 0 {
            return;
        }
        self.page = (self.page + 1) % pages;
    }

    pub fn prev_page(&mut self, filtered_len: usize) {
        let pages = self.pages(filtered_len);
        if pages == 0 {
            return;
        }
        self.page = (self.page % pages + pages - 1) % pages;
    }

    pub fn go_to_page(&mut self, page: usize, filtered_len: usize) {
        if page < self.pages(filtered_len) {
            self.page = page;
        }
    }

    pub fn reveal_all(&mut self) {
        self.show_all = true;
    }

    /// Page controls only make sense while paging through more than one page
    pub fn shows_page_controls(&self, filtered_len: usize) -> bool {
        !self.show_all && self.pages(filtered_len) > 1
    }

    /// Page actually rendered, clamped in case the list shrank under the cursor
    pub fn effective_page(&self, filtered_len: usize) -> usize {
        self.page.min(self.pages(filtered_len).saturating_sub(1))
    }

    /// The properties to render for the current state
    pub fn visible<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        let filtered = filter_properties(properties, self.filter);
        if self.show_all {
            return filtered;
        }
        let start = self.effective_page(filtered.len()) * self.page_size;
        filtered.into_iter().skip(start).take(self.page_size).collect()
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_property(id: u32, status: PropertyStatus, property_type: PropertyType) -> Property {
        Property {
            id,
            title: format!("Property {}", id),
            price: "₹50 L".to_string(),
            location: "Rourkela".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            area: "1500 sq ft".to_string(),
            image: String::new(),
            features: vec![],
            property_type,
            status,
        }
    }

    fn sample_list(len: u32) -> Vec<Property> {
        (1..=len)
            .map(|id| {
                let status = if id % 2 == 0 { PropertyStatus::ForRent } else { PropertyStatus::ForSale };
                let kind = match id % 3 {
                    0 => PropertyType::Villa,
                    1 => PropertyType::Apartment,
                    _ => PropertyType::Bungalow,
                };
                make_property(id, status, kind)
            })
            .collect()
    }

    fn ids(list: &[&Property]) -> Vec<u32> {
        list.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_filter_by_either_axis() {
        let list = vec![
            make_property(1, PropertyStatus::ForSale, PropertyType::Villa),
            make_property(2, PropertyStatus::ForRent, PropertyType::Apartment),
        ];
        assert_eq!(ids(&filter_properties(&list, PropertyFilter::Villa)), vec![1]);
        assert_eq!(ids(&filter_properties(&list, PropertyFilter::ForRent)), vec![2]);
        assert_eq!(ids(&filter_properties(&list, PropertyFilter::All)), vec![1, 2]);
        assert!(filter_properties(&list, PropertyFilter::Bungalow).is_empty());
    }

    #[test]
    fn test_filter_matches_predicate_exactly() {
        let mut list = sample_list(17);
        list.push(make_property(99, PropertyStatus::ForSale, PropertyType::Other("Plot".to_string())));
        for filter in PropertyFilter::ALL {
            let expected: Vec<u32> = list
                .iter()
                .filter(|p| {
                    filter == PropertyFilter::All
                        || p.status.as_str() == filter.label()
                        || p.property_type.as_str() == filter.label()
                })
                .map(|p| p.id)
                .collect();
            assert_eq!(ids(&filter_properties(&list, filter)), expected, "filter {:?}", filter);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let list = sample_list(12);
        for filter in PropertyFilter::ALL {
            let once: Vec<Property> = filter_properties(&list, filter).into_iter().cloned().collect();
            let twice = filter_properties(&once, filter);
            assert_eq!(ids(&twice), once.iter().map(|p| p.id).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_other_type_only_matches_all_and_status() {
        let list = vec![make_property(1, PropertyStatus::ForRent, PropertyType::Other("Plot".to_string()))];
        assert_eq!(filter_properties(&list, PropertyFilter::All).len(), 1);
        assert_eq!(filter_properties(&list, PropertyFilter::ForRent).len(), 1);
        assert!(filter_properties(&list, PropertyFilter::Villa).is_empty());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 6), 0);
        assert_eq!(page_count(1, 6), 1);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(13, 6), 3);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    fn test_pages_reconstruct_list() {
        let list = sample_list(14);
        let mut state = CatalogState::new(4);
        let pages = state.pages(list.len());
        let mut seen = Vec::new();
        for page in 0..pages {
            state.go_to_page(page, list.len());
            seen.extend(ids(&state.visible(&list)));
        }
        assert_eq!(seen, (1..=14).collect::<Vec<_>>());
    }

    #[test]
    fn test_paging_wraps() {
        let list = sample_list(13);
        let mut state = CatalogState::new(6);
        state.prev_page(list.len());
        assert_eq!(state.page, 2);
        state.next_page(list.len());
        assert_eq!(state.page, 0);
        state.next_page(list.len());
        state.next_page(list.len());
        assert_eq!(state.page, 2);
        assert_eq!(ids(&state.visible(&list)), vec![13]);
    }

    #[test]
    fn test_go_to_page_out_of_range_is_ignored() {
        let mut state = CatalogState::new(6);
        state.go_to_page(5, 10);
        assert_eq!(state.page, 0);
        state.go_to_page(1, 10);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_single_full_page_has_no_controls() {
        let list = sample_list(6);
        let mut state = CatalogState::new(6);
        assert!(!state.shows_page_controls(list.len()));
        state.next_page(list.len());
        assert_eq!(state.page, 0);
        state.prev_page(list.len());
        assert_eq!(state.page, 0);
        assert_eq!(ids(&state.visible(&list)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_result_has_no_controls() {
        let list = vec![make_property(1, PropertyStatus::ForSale, PropertyType::Villa)];
        let mut state = CatalogState::new(6);
        state.set_filter(PropertyFilter::Bungalow);
        let filtered = filter_properties(&list, state.filter).len();
        state.next_page(filtered);
        state.prev_page(filtered);
        assert_eq!(state.page, 0);
        assert!(state.visible(&list).is_empty());
        assert!(!state.shows_page_controls(filtered));
    }

    #[test]
    fn test_reveal_all_is_monotonic_until_filter_changes() {
        let list = sample_list(14);
        let mut state = CatalogState::new(6);
        state.next_page(list.len());
        state.reveal_all();
        assert_eq!(state.visible(&list).len(), 14);
        assert!(!state.shows_page_controls(list.len()));

        state.next_page(list.len());
        state.reveal_all();
        assert!(state.show_all);
        assert_eq!(state.visible(&list).len(), 14);

        state.set_filter(PropertyFilter::ForSale);
        assert!(!state.show_all);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_set_filter_resets_cursor_even_for_same_filter() {
        let mut state = CatalogState::new(2);
        state.next_page(10);
        state.next_page(10);
        state.set_filter(PropertyFilter::All);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_stale_cursor_is_clamped() {
        let list = sample_list(7);
        let mut state = CatalogState::new(3);
        state.page = 9;
        assert_eq!(state.effective_page(list.len()), 2);
        assert_eq!(ids(&state.visible(&list)), vec![7]);
    }
}
