//! Carousel State Machine
//!
//! Circular cursor over a fixed list with a visible window and an autoplay
//! flag. Manual navigation pauses autoplay until the user resumes it.

/// Who drives the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayState {
    /// The periodic timer advances the cursor
    #[default]
    Autoplaying,
    /// Only the user moves the cursor
    Paused,
}

/// Number of items visible at once for a viewport width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub narrow_width: usize,
    pub wide_width: usize,
    /// Viewport width (px) from which the wide window applies
    pub breakpoint_px: f64,
}

impl CarouselLayout {
    /// Testimonials: one card on phones, three from the `lg` breakpoint
    pub const TESTIMONIALS: CarouselLayout = CarouselLayout {
        narrow_width: 1,
        wide_width: 3,
        breakpoint_px: 1024.0,
    };

    /// Localities: two tiles on phones, three from the `md` breakpoint
    pub const LOCALITIES: CarouselLayout = CarouselLayout {
        narrow_width: 2,
        wide_width: 3,
        breakpoint_px: 768.0,
    };

    pub fn for_viewport(&self, width_px: f64) -> usize {
        if width_px >= self.breakpoint_px {
            self.wide_width
        } else {
            self.narrow_width
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: AutoplayState,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            autoplay: AutoplayState::Autoplaying,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn autoplay(&self) -> AutoplayState {
        self.autoplay
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay == AutoplayState::Autoplaying
    }

    fn step_forward(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    fn step_back(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Timer-driven advance; ignored while paused
    pub fn tick(&mut self) -> bool {
        if self.autoplay == AutoplayState::Paused || self.len == 0 {
            return false;
        }
        self.step_forward();
        true
    }

    pub fn next(&mut self) {
        self.step_forward();
        self.pause();
    }

    pub fn prev(&mut self) {
        self.step_back();
        self.pause();
    }

    pub fn go_to(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
        self.pause();
    }

    pub fn pause(&mut self) {
        if self.autoplay == AutoplayState::Autoplaying {
            log::debug!("[Carousel] autoplay paused at {}", self.index);
        }
        self.autoplay = AutoplayState::Paused;
    }

    /// The only way back to `Autoplaying`
    pub fn toggle_autoplay(&mut self) {
        self.autoplay = match self.autoplay {
            AutoplayState::Autoplaying => AutoplayState::Paused,
            AutoplayState::Paused => AutoplayState::Autoplaying,
        };
    }

    /// Indices in the visible window, starting at the cursor; never repeats an item
    pub fn window(&self, width: usize) -> Vec<usize> {
        (0..width.min(self.len))
            .map(|offset| (self.index + offset) % self.len)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut carousel = Carousel::new(5);
        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 3);
        carousel.next();
        assert_eq!(carousel.index(), 4);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_next_k_times_is_modular() {
        for n in 1..7usize {
            for start in 0..n {
                for k in 0..15usize {
                    let mut carousel = Carousel::new(n);
                    carousel.go_to(start);
                    for _ in 0..k {
                        carousel.next();
                    }
                    assert_eq!(carousel.index(), (start + k) % n);
                }
            }
        }
    }

    #[test]
    fn test_prev_k_times_is_modular() {
        for n in 1..7usize {
            for start in 0..n {
                for k in 0..15usize {
                    let mut carousel = Carousel::new(n);
                    carousel.go_to(start);
                    for _ in 0..k {
                        carousel.prev();
                    }
                    let expected = ((start as isize - k as isize).rem_euclid(n as isize)) as usize;
                    assert_eq!(carousel.index(), expected);
                }
            }
        }
    }

    #[test]
    fn test_manual_navigation_pauses_autoplay() {
        let mut carousel = Carousel::new(4);
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 1);

        carousel.next();
        assert_eq!(carousel.autoplay(), AutoplayState::Paused);
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 2);

        carousel.toggle_autoplay();
        assert!(carousel.is_autoplaying());
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_prev_and_go_to_pause_autoplay() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        assert!(!carousel.is_autoplaying());

        let mut carousel = Carousel::new(3);
        carousel.go_to(7);
        assert_eq!(carousel.index(), 1);
        assert!(!carousel.is_autoplaying());
    }

    #[test]
    fn test_toggle_from_autoplaying_pauses() {
        let mut carousel = Carousel::new(3);
        carousel.toggle_autoplay();
        assert_eq!(carousel.autoplay(), AutoplayState::Paused);
    }

    #[test]
    fn test_window_wraps_and_caps_at_len() {
        let mut carousel = Carousel::new(5);
        carousel.go_to(4);
        assert_eq!(carousel.window(3), vec![4, 0, 1]);
        assert_eq!(carousel.window(1), vec![4]);

        let small = Carousel::new(2);
        assert_eq!(small.window(3), vec![0, 1]);
    }

    #[test]
    fn test_empty_carousel_ignores_everything() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.tick());
        carousel.next();
        carousel.prev();
        carousel.go_to(3);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.window(3).is_empty());
    }

    #[test]
    fn test_layout_breakpoints() {
        assert_eq!(CarouselLayout::TESTIMONIALS.for_viewport(375.0), 1);
        assert_eq!(CarouselLayout::TESTIMONIALS.for_viewport(1024.0), 3);
        assert_eq!(CarouselLayout::LOCALITIES.for_viewport(500.0), 2);
        assert_eq!(CarouselLayout::LOCALITIES.for_viewport(800.0), 3);
        assert_ne!(CarouselLayout::TESTIMONIALS, CarouselLayout::LOCALITIES);
    }

    #[test]
    fn test_single_item_carousel_stays_on_zero() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.toggle_autoplay();
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.window(3), vec![0]);
    }

    #[test]
    fn test_tick_keeps_autoplay_flag() {
        let mut carousel = Carousel::new(4);
        for _ in 0..6 {
            assert!(carousel.tick());
            assert!(carousel.is_autoplaying());
        }
        assert_eq!(carousel.index(), 2);
    }
}
