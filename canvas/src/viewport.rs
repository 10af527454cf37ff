//! Viewport model: pan/zoom state and client ↔ canvas coordinate conversion.
//!
//! The viewport is the single authority for how screen pixels map onto
//! document space. Engines that need the mapping (for example to render)
//! receive a copy through [`crate::engine::Engine::sync_viewport`] and never
//! change it themselves.
//!
//! The mapping is `canvas = origin + client / zoom`, with `origin` in
//! document units and `zoom` a strictly positive scale factor.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_WHEEL_DELTA, MAX_ZOOM, MIN_ZOOM};

/// A point in either client (screen) or canvas (document) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom state for the drawing surface.
///
/// `width` / `height` are the logical document extent visible on the canvas
/// and are always `round(canvas_size / zoom)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    origin: Point,
    zoom: f64,
    canvas_width: f64,
    canvas_height: f64,
    width: f64,
    height: f64,
    surface_id: String,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl Viewport {
    /// A viewport at origin (0, 0), zoom 1, over a canvas of the given pixel size.
    #[must_use]
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        let mut viewport = Self {
            origin: Point::new(0.0, 0.0),
            zoom: 1.0,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            surface_id: String::new(),
        };
        viewport.resize_canvas(canvas_width, canvas_height);
        viewport
    }

    // --- Queries ---

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    /// Logical document width visible on the canvas.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Logical document height visible on the canvas.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    #[must_use]
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Identifier of the host surface this viewport draws into. Empty until set.
    #[must_use]
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    // --- Conversions ---

    /// Convert a client-space point (screen pixels) to canvas coordinates.
    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        Point {
            x: self.origin.x + client.x / self.zoom,
            y: self.origin.y + client.y / self.zoom,
        }
    }

    /// Convert a canvas point to client space. Exact inverse of [`Self::client_to_canvas`].
    #[must_use]
    pub fn canvas_to_client(&self, canvas: Point) -> Point {
        Point {
            x: (canvas.x - self.origin.x) * self.zoom,
            y: (canvas.y - self.origin.y) * self.zoom,
        }
    }

    // --- Mutations ---

    /// Zoom about a client-space point, keeping the document point under it fixed.
    ///
    /// The wheel delta is clamped to [`MAX_WHEEL_DELTA`] in magnitude and
    /// negated, so scrolling up (negative delta) zooms in. The resulting zoom
    /// is clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`] and the origin is rounded to
    /// whole document units. Non-finite input, or a result that overflows,
    /// leaves the viewport unchanged.
    pub fn zoom(&mut self, delta_y: f64, client_x: f64, client_y: f64) {
        if !(delta_y.is_finite() && client_x.is_finite() && client_y.is_finite()) {
            tracing::debug!(delta_y, client_x, client_y, "ignoring non-finite zoom");
            return;
        }

        let cursor = self.client_to_canvas(Point::new(client_x, client_y));

        let step = -delta_y.signum() * delta_y.abs().min(MAX_WHEEL_DELTA);
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * (1.0 + step / 100.0)).clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = old_zoom / new_zoom;

        let origin = Point {
            x: (cursor.x - ratio * (cursor.x - self.origin.x)).round(),
            y: (cursor.y - ratio * (cursor.y - self.origin.y)).round(),
        };
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            tracing::debug!(delta_y, client_x, client_y, "zoom overflowed; viewport unchanged");
            return;
        }
        self.origin = origin;
        self.zoom = new_zoom;
        self.update_extent();
    }

    /// Translate the origin by a screen-space delta. No zoom scaling is applied.
    ///
    /// A delta that would overflow the origin is ignored.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        if !(delta_x.is_finite() && delta_y.is_finite()) {
            tracing::debug!(delta_x, delta_y, "ignoring non-finite pan");
            return;
        }
        let origin = Point::new(self.origin.x + delta_x, self.origin.y + delta_y);
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            tracing::debug!(delta_x, delta_y, "pan overflowed; viewport unchanged");
            return;
        }
        self.origin = origin;
    }

    /// Record a new canvas pixel size and recompute the logical extent.
    ///
    /// Negative or non-finite sizes are ignored.
    pub fn resize_canvas(&mut self, canvas_width: f64, canvas_height: f64) {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !(valid(canvas_width) && valid(canvas_height)) {
            tracing::debug!(canvas_width, canvas_height, "ignoring invalid canvas size");
            return;
        }
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
        self.update_extent();
    }

    pub fn set_surface_id(&mut self, surface_id: impl Into<String>) {
        self.surface_id = surface_id.into();
    }

    fn update_extent(&mut self) {
        self.width = (self.canvas_width / self.zoom).round();
        self.height = (self.canvas_height / self.zoom).round();
    }
}
