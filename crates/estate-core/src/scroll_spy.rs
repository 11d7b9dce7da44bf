//! Scroll Spy
//!
//! Derives the highlighted navigation section and the header style from a
//! single scroll sample.

/// Vertical extent of one page section, in document pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section under the middle of the viewport, first match wins
pub fn active_section<'a>(
    sections: &'a [SectionBounds],
    scroll_y: f64,
    viewport_height: f64,
    default: &'a str,
) -> &'a str {
    let probe = scroll_y + viewport_height / 2.0;
    sections
        .iter()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
        .unwrap_or(default)
}

/// Header switches to its solid style past the threshold
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("hero", 0.0, 800.0),
            SectionBounds::new("properties", 800.0, 1200.0),
            SectionBounds::new("about", 2000.0, 600.0),
            SectionBounds::new("contact", 2600.0, 900.0),
        ]
    }

    #[test]
    fn test_active_section_uses_viewport_middle() {
        let sections = page();
        assert_eq!(active_section(&sections, 0.0, 800.0, "hero"), "hero");
        // probe = 500 + 400 = 900
        assert_eq!(active_section(&sections, 500.0, 800.0, "hero"), "properties");
        // probe = 1700 + 400 = 2100
        assert_eq!(active_section(&sections, 1700.0, 800.0, "hero"), "about");
    }

    #[test]
    fn test_section_boundary_belongs_to_next_section() {
        let sections = page();
        // probe exactly 2000
        assert_eq!(active_section(&sections, 1600.0, 800.0, "hero"), "about");
    }

    #[test]
    fn test_falls_back_to_default() {
        let sections = page();
        assert_eq!(active_section(&sections, 5000.0, 800.0, "hero"), "hero");
        assert_eq!(active_section(&[], 0.0, 800.0, "hero"), "hero");
    }

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }
}
