//! Which page section the reader is looking at, from element positions.

/// Page scroll past which the nav bar switches to its compact style.
pub const SCROLLED_PX: f64 = 50.0;

/// Manual scroll distance that collapses an open mobile menu.
pub const COLLAPSE_PX: f64 = 50.0;

/// Fraction of the viewport height a section's top must cross to count as
/// the one in view.
pub const ACTIVE_LINE: f64 = 0.3;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_PX
}

/// The last section, in page order, whose top edge has passed the active
/// line. `tops` are viewport-relative, as from `getBoundingClientRect`.
/// Falls back to the first section when none has.
pub fn active_section(tops: &[(&'static str, f64)], viewport_height: f64) -> Option<&'static str> {
    let line = viewport_height * ACTIVE_LINE;
    tops.iter()
        .rev()
        .find(|(_, top)| *top <= line)
        .or_else(|| tops.first())
        .map(|(id, _)| *id)
}

/// Whether a scroll from `last_y` to `scroll_y` should close the open menu.
pub fn should_collapse(menu_open: bool, last_y: f64, scroll_y: f64) -> bool {
    menu_open && (scroll_y - last_y).abs() > COLLAPSE_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    #[test]
    fn top_of_page_is_hero() {
        let tops = [("hero", 0.0), ("portfolio", 900.0), ("about", 2000.0)];
        assert_eq!(active_section(&tops, VIEWPORT), Some("hero"));
    }

    #[test]
    fn section_counts_once_past_the_line() {
        let tops = [("hero", -1200.0), ("portfolio", -400.0), ("about", 301.0)];
        assert_eq!(active_section(&tops, VIEWPORT), Some("portfolio"));

        let tops = [("hero", -1200.0), ("portfolio", -400.0), ("about", 300.0)];
        assert_eq!(active_section(&tops, VIEWPORT), Some("about"));
    }

    #[test]
    fn later_sections_win() {
        let tops = [("care", -50.0), ("testimonials", 100.0), ("contact", 200.0)];
        assert_eq!(active_section(&tops, VIEWPORT), Some("contact"));
    }

    #[test]
    fn nothing_past_the_line_keeps_first() {
        let tops = [("hero", 500.0), ("portfolio", 1500.0)];
        assert_eq!(active_section(&tops, VIEWPORT), Some("hero"));
        assert_eq!(active_section(&[], VIEWPORT), None);
    }

    #[test]
    fn scrolled_after_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn only_open_menu_collapses_on_large_scroll() {
        assert!(should_collapse(true, 100.0, 151.0));
        assert!(should_collapse(true, 400.0, 300.0));
        assert!(!should_collapse(true, 100.0, 140.0));
        assert!(!should_collapse(false, 0.0, 900.0));
    }
}
