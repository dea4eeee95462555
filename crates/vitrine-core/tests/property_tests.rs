//! Property-based tests for the scroll math and email validation
//!
//! Uses proptest to verify the invariants that must hold for *all* inputs,
//! not just the handful of offsets a manual test would pick.

use proptest::prelude::*;
use vitrine_core::{
    crossed_to_desktop, header_scrolled, is_valid_email, parallax_shift, visible_fraction,
    RevealLatch, HEADER_SCROLL_THRESHOLD, MOBILE_BREAKPOINT, PARALLAX_RATE,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Scroll offsets, including negative overscroll and very long pages.
fn offset_strategy() -> impl Strategy<Value = f64> {
    -10_000.0..1_000_000.0f64
}

/// Characters legal on either side of the `@` (no whitespace, no `@`).
fn atom_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9.+-]{1,12}")
        .expect("valid regex")
        .prop_filter("non-empty", |s| !s.is_empty())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The header flag is exactly "offset strictly above the threshold".
    #[test]
    fn header_flag_matches_threshold(offset in offset_strategy()) {
        prop_assert_eq!(header_scrolled(offset), offset > HEADER_SCROLL_THRESHOLD);
    }

    /// Parallax is exactly the configured rate, for any offset including
    /// negative overscroll. Multiplying by -0.5 is exact in IEEE 754, so
    /// strict equality is safe.
    #[test]
    fn parallax_is_exact(offset in offset_strategy()) {
        prop_assert_eq!(parallax_shift(offset), PARALLAX_RATE * offset);
    }

    /// Visible fraction is always a valid fraction.
    #[test]
    fn visible_fraction_is_bounded(
        top in -5_000.0..5_000.0f64,
        height in 0.0..3_000.0f64,
        viewport in 100.0..4_000.0f64,
    ) {
        let f = visible_fraction(top, height, viewport);
        prop_assert!((0.0..=1.0).contains(&f));
    }

    /// A latch never resets, whatever observation sequence follows.
    #[test]
    fn latch_is_permanent(fractions in prop::collection::vec(0.0..1.0f64, 1..40)) {
        let mut latch = RevealLatch::with_targets(1);
        let mut ever = false;
        for f in fractions {
            latch.observe(0, f);
            ever |= f >= 0.1;
            prop_assert_eq!(latch.is_revealed(0), ever);
        }
    }

    /// Breakpoint crossing fires iff the width moved from the mobile side
    /// to the desktop side.
    #[test]
    fn breakpoint_crossing_matches_sides(
        prev in 100.0..2_000.0f64,
        new in 100.0..2_000.0f64,
    ) {
        prop_assert_eq!(
            crossed_to_desktop(prev, new),
            prev <= MOBILE_BREAKPOINT && new > MOBILE_BREAKPOINT
        );
    }

    /// Anything shaped local@domain.tld from the permitted alphabet passes.
    #[test]
    fn well_shaped_addresses_pass(
        local in atom_strategy(),
        domain in prop::string::string_regex("[a-z0-9-]{1,10}").expect("valid regex"),
        tld in prop::string::string_regex("[a-z]{1,6}").expect("valid regex"),
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email), "rejected {email}");
    }

    /// No `@` at all never passes.
    #[test]
    fn addresses_without_at_fail(text in "[a-z0-9. ]{0,30}") {
        prop_assert!(!is_valid_email(&text));
    }

    /// Whitespace anywhere spoils an otherwise valid address.
    #[test]
    fn whitespace_spoils_addresses(pos in 0usize..9) {
        let mut email: Vec<char> = "ab@cd.ef".chars().collect();
        email.insert(pos.min(email.len()), ' ');
        let email: String = email.into_iter().collect();
        prop_assert!(!is_valid_email(&email));
    }
}
