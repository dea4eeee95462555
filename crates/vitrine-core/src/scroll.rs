//! Scroll-driven presentation math
//!
//! Everything the scroll bridge needs to decide header state, hero
//! parallax, reveal latching, and the active nav section. Pure geometry
//! plus one latch structure; the caller owns event delivery and class
//! application.
//!
//! All quantities are CSS pixels. `offset` is the document's vertical
//! scroll position; element positions in a [`ScrollFrame`] are
//! viewport-relative (what `getBoundingClientRect` reports).

use serde::{Deserialize, Serialize};

/// Scroll offset above which the header takes its "scrolled" styling.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Hero translation per scrolled pixel. Negative: the hero drifts up at
/// half speed as the page scrolls down.
pub const PARALLAX_RATE: f64 = -0.5;

/// Fraction of an element that must enter the trigger region to latch its
/// reveal animation.
pub const REVEAL_FRACTION: f64 = 0.1;

/// Amount shaved off the bottom of the viewport when computing the trigger
/// region, so elements reveal slightly before they fully enter view.
pub const REVEAL_BOTTOM_INSET: f64 = 50.0;

/// One geometry report from the document.
///
/// The bridge script posts a frame on every scroll and resize event, plus
/// one at mount so presentation state is correct before the first user
/// scroll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollFrame {
    /// Vertical scroll offset.
    pub offset: f64,
    /// Viewport width.
    pub viewport_width: f64,
    /// Viewport height.
    pub viewport_height: f64,
    /// Current rendered height of the fixed header (scroll-spy baseline).
    pub header_height: f64,
    /// Viewport-relative `(top, height)` of each reveal target, in
    /// registration order.
    pub targets: Vec<(f64, f64)>,
    /// Viewport-relative top of each section anchor, in section order.
    pub sections: Vec<f64>,
}

/// Whether the header should carry its "scrolled" class.
///
/// Strictly greater-than: an offset of exactly the threshold still counts
/// as not scrolled. Recomputed per frame, never incrementally toggled.
pub fn header_scrolled(offset: f64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

/// Vertical translation of the hero for a given scroll offset.
///
/// Unclamped: a very long page (or negative overscroll) translates
/// arbitrarily far. Accepted behaviour.
pub fn parallax_shift(offset: f64) -> f64 {
    offset * PARALLAX_RATE
}

/// Scroll position that puts a section's top just below the fixed header.
///
/// `section_top` is the section's absolute document offset.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

/// Fraction of an element lying inside the trigger region.
///
/// The trigger region is the viewport with [`REVEAL_BOTTOM_INSET`] shaved
/// off its bottom edge. `top` is viewport-relative.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let region_bottom = viewport_height - REVEAL_BOTTOM_INSET;
    let visible_top = top.max(0.0);
    let visible_bottom = (top + height).min(region_bottom);
    ((visible_bottom - visible_top) / height).clamp(0.0, 1.0)
}

/// Index of the section the viewport is currently in, for nav highlighting.
///
/// The active section is the last one whose top has reached the header
/// line. `None` only when every section is still below it (e.g. a frame
/// arriving before layout settles).
pub fn active_section(section_tops: &[f64], header_height: f64) -> Option<usize> {
    section_tops
        .iter()
        .enumerate()
        .rev()
        .find(|(_, top)| **top <= header_height)
        .map(|(i, _)| i)
}

/// Per-element permanent reveal flags.
///
/// Each observed element registers once at setup and is keyed by its
/// registration index. [`RevealLatch::observe`] latches the flag the first
/// time the element's visible fraction crosses [`REVEAL_FRACTION`]; there
/// is no way to un-latch.
#[derive(Debug, Clone, Default)]
pub struct RevealLatch {
    revealed: Vec<bool>,
}

impl RevealLatch {
    /// Creates an empty latch set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a latch set with `count` registered elements.
    pub fn with_targets(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Registers one more element, returning its index.
    pub fn register(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// Whether no elements are registered.
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Feeds one visibility observation.
    ///
    /// Returns true if this observation latched the element (first crossing
    /// of the threshold). Unknown indices are ignored.
    pub fn observe(&mut self, index: usize, fraction: f64) -> bool {
        match self.revealed.get_mut(index) {
            Some(slot) if !*slot && fraction >= REVEAL_FRACTION => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    /// Whether a frame's worth of target geometry would latch anything.
    ///
    /// Read-only twin of [`RevealLatch::observe_frame`], so callers can
    /// skip taking a write lock (and re-rendering) on frames that change
    /// nothing.
    pub fn would_latch(&self, targets: &[(f64, f64)], viewport_height: f64) -> bool {
        targets.iter().enumerate().any(|(index, (top, height))| {
            self.revealed.get(index) == Some(&false)
                && visible_fraction(*top, *height, viewport_height) >= REVEAL_FRACTION
        })
    }

    /// Feeds a whole frame's worth of target geometry, latching any element
    /// whose visible fraction crosses the threshold. Returns how many
    /// latched this frame.
    pub fn observe_frame(&mut self, targets: &[(f64, f64)], viewport_height: f64) -> usize {
        let mut latched = 0;
        for (index, (top, height)) in targets.iter().enumerate() {
            if self.observe(index, visible_fraction(*top, *height, viewport_height)) {
                latched += 1;
            }
        }
        latched
    }

    /// Whether the element at `index` has ever crossed the threshold.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_flag_boundary_is_strict() {
        assert!(!header_scrolled(50.0));
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(100.1));
        assert!(header_scrolled(150.0));
        assert!(!header_scrolled(-20.0));
    }

    #[test]
    fn parallax_is_half_speed_upward() {
        assert_eq!(parallax_shift(0.0), 0.0);
        assert_eq!(parallax_shift(200.0), -100.0);
        // Overscroll (negative offset) pushes the hero down.
        assert_eq!(parallax_shift(-40.0), 20.0);
    }

    #[test]
    fn scroll_target_compensates_for_header() {
        assert_eq!(scroll_target(900.0, 72.0), 828.0);
        // A section above the header line yields a negative target; the
        // viewport clamps that itself.
        assert_eq!(scroll_target(10.0, 72.0), -62.0);
    }

    #[test]
    fn fully_visible_element_has_fraction_one() {
        assert_eq!(visible_fraction(100.0, 200.0, 800.0), 1.0);
    }

    #[test]
    fn offscreen_elements_have_fraction_zero() {
        // Below the viewport.
        assert_eq!(visible_fraction(900.0, 200.0, 800.0), 0.0);
        // Inside the bottom inset band but not above it.
        assert_eq!(visible_fraction(760.0, 200.0, 800.0), 0.0);
        // Fully above the viewport.
        assert_eq!(visible_fraction(-300.0, 200.0, 800.0), 0.0);
    }

    #[test]
    fn bottom_inset_shrinks_trigger_region() {
        // Element top at 700 in an 800px viewport: region bottom is 750,
        // so only 50 of its 200 px count.
        assert_eq!(visible_fraction(700.0, 200.0, 800.0), 0.25);
    }

    #[test]
    fn partial_overlap_at_top_counts() {
        // Element half scrolled off the top.
        assert_eq!(visible_fraction(-100.0, 200.0, 800.0), 0.5);
    }

    #[test]
    fn zero_height_element_never_reveals() {
        assert_eq!(visible_fraction(100.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn latch_fires_once_and_stays() {
        let mut latch = RevealLatch::with_targets(2);
        assert!(!latch.is_revealed(0));

        assert!(latch.observe(0, 0.1));
        assert!(latch.is_revealed(0));

        // Already latched: observing again reports no change.
        assert!(!latch.observe(0, 1.0));

        // Dropping below the threshold does not un-latch.
        assert!(!latch.observe(0, 0.0));
        assert!(latch.is_revealed(0));

        assert!(!latch.is_revealed(1));
    }

    #[test]
    fn latch_ignores_subthreshold_and_unknown() {
        let mut latch = RevealLatch::with_targets(1);
        assert!(!latch.observe(0, 0.09));
        assert!(!latch.is_revealed(0));
        assert!(!latch.observe(7, 1.0));
        assert!(!latch.is_revealed(7));
    }

    #[test]
    fn observe_frame_latches_visible_targets() {
        let mut latch = RevealLatch::with_targets(3);
        // 800px viewport: first target fully visible, second just pokes
        // into the trigger region, third still below it.
        let targets = [(100.0, 200.0), (730.0, 200.0), (790.0, 200.0)];
        let latched = latch.observe_frame(&targets, 800.0);

        assert_eq!(latched, 2);
        assert!(latch.is_revealed(0));
        assert!(latch.is_revealed(1));
        assert!(!latch.is_revealed(2));
    }

    #[test]
    fn would_latch_agrees_with_observe_frame() {
        let latch = RevealLatch::with_targets(2);
        let visible = [(100.0, 200.0), (900.0, 200.0)];
        assert!(latch.would_latch(&visible, 800.0));

        let mut latched = latch.clone();
        latched.observe_frame(&visible, 800.0);
        // Everything reachable has latched; the frame is now inert.
        assert!(!latched.would_latch(&visible, 800.0));

        // Unregistered targets never count.
        let empty = RevealLatch::new();
        assert!(!empty.would_latch(&visible, 800.0));
    }

    #[test]
    fn register_grows_the_set() {
        let mut latch = RevealLatch::new();
        assert!(latch.is_empty());
        assert_eq!(latch.register(), 0);
        assert_eq!(latch.register(), 1);
        assert_eq!(latch.len(), 2);
    }

    #[test]
    fn active_section_is_last_past_header() {
        // Three sections; viewport scrolled so the second's top is above
        // the 72px header line and the third is still below it.
        let tops = [-500.0, 40.0, 600.0];
        assert_eq!(active_section(&tops, 72.0), Some(1));

        // At the very top of the page, the first section is active.
        let tops = [0.0, 900.0, 1800.0];
        assert_eq!(active_section(&tops, 72.0), Some(0));

        // Before layout settles nothing may be active.
        let tops = [300.0, 900.0];
        assert_eq!(active_section(&tops, 72.0), None);
    }

    #[test]
    fn active_section_empty_input() {
        assert_eq!(active_section(&[], 72.0), None);
    }
}
