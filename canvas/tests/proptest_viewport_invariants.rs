//! Property-based invariant tests for the viewport model.
//!
//! 1. Zooming keeps the document point under the cursor fixed (within one unit).
//! 2. Zoom stays within [`MIN_ZOOM`, `MAX_ZOOM`] for any delta sequence.
//! 3. `canvas_to_client` inverts `client_to_canvas`.
//! 4. Logical extent is always `round(canvas_size / zoom)`.
//! 5. Pan translates the origin by exactly the delta.

use canvas::consts::{MAX_ZOOM, MIN_ZOOM};
use canvas::viewport::{Point, Viewport};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// A viewport reached through a plausible history of pans and zooms.
fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (
        -10_000.0f64..10_000.0,
        -10_000.0f64..10_000.0,
        prop::collection::vec((-50.0f64..50.0, 0.0f64..2000.0, 0.0f64..2000.0), 0..20),
        1.0f64..4000.0,
        1.0f64..4000.0,
    )
        .prop_map(|(pan_x, pan_y, zooms, w, h)| {
            let mut vp = Viewport::new(w, h);
            vp.pan(pan_x, pan_y);
            for (dy, cx, cy) in zooms {
                vp.zoom(dy, cx, cy);
            }
            vp
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Zoom keeps the cursor's document point fixed
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zoom_preserves_point_under_cursor(
        vp in viewport_strategy(),
        delta in -1000.0f64..1000.0,
        cx in 0.0f64..2000.0,
        cy in 0.0f64..2000.0,
    ) {
        let mut vp = vp;
        let client = Point::new(cx, cy);
        let before = vp.client_to_canvas(client);
        vp.zoom(delta, cx, cy);
        let after = vp.client_to_canvas(client);
        prop_assert!(
            (after.x - before.x).abs() <= 1.0 && (after.y - before.y).abs() <= 1.0,
            "cursor drifted: before={:?} after={:?} viewport={:?}",
            before, after, vp
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Zoom never leaves its bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zoom_stays_positive_and_bounded(
        deltas in prop::collection::vec(-10_000.0f64..10_000.0, 1..300),
    ) {
        let mut vp = Viewport::default();
        for delta in deltas {
            vp.zoom(delta, 200.0, 200.0);
            prop_assert!(vp.zoom_factor() > 0.0);
            prop_assert!(vp.zoom_factor() >= MIN_ZOOM && vp.zoom_factor() <= MAX_ZOOM);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Client ↔ canvas round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn client_canvas_round_trip(
        vp in viewport_strategy(),
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
    ) {
        let client = Point::new(x, y);
        let back = vp.canvas_to_client(vp.client_to_canvas(client));
        prop_assert!((back.x - x).abs() < 1e-6 && (back.y - y).abs() < 1e-6, "{:?} -> {:?}", client, back);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Logical extent follows canvas size and zoom
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn extent_matches_canvas_over_zoom(vp in viewport_strategy()) {
        prop_assert_eq!(vp.width(), (vp.canvas_width() / vp.zoom_factor()).round());
        prop_assert_eq!(vp.height(), (vp.canvas_height() / vp.zoom_factor()).round());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Pan is a pure translation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pan_translates_origin(
        vp in viewport_strategy(),
        dx in -1000.0f64..1000.0,
        dy in -1000.0f64..1000.0,
    ) {
        let mut panned = vp.clone();
        panned.pan(dx, dy);
        prop_assert_eq!(panned.origin(), Point::new(vp.origin().x + dx, vp.origin().y + dy));
        prop_assert_eq!(panned.zoom_factor(), vp.zoom_factor());
    }
}
