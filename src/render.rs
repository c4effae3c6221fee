//! Render Geometry Snapshot
//!
//! Carries the client-to-screen coordinate mapping for one moment in time.
//! Client surfaces render a scaled view of the remote screen; every pointer
//! and touch position must be multiplied back up to screen space and clamped
//! before injection. Embedders construct a fresh snapshot per event batch, so
//! nothing here caches or watches for resolution changes.

/// Scale factors and screen bounds for coordinate mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderData {
    /// Horizontal client-to-screen scale factor
    pub scale_x: f32,

    /// Vertical client-to-screen scale factor
    pub scale_y: f32,

    /// Remote screen width (pixels)
    pub screen_width: i32,

    /// Remote screen height (pixels)
    pub screen_height: i32,
}

impl RenderData {
    /// Create a snapshot with unit scale
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            screen_width,
            screen_height,
        }
    }

    /// Create a snapshot with explicit scale factors
    pub fn with_scale(screen_width: i32, screen_height: i32, scale_x: f32, scale_y: f32) -> Self {
        Self {
            scale_x,
            scale_y,
            screen_width,
            screen_height,
        }
    }

    /// Map a client-space position to clamped screen coordinates
    ///
    /// Scales each axis, truncates toward zero, then clamps into
    /// `[0, screen_width]` and `[0, screen_height]`. The upper bound is
    /// inclusive to match the downstream server's coordinate range.
    pub fn map_to_screen(&self, x: f32, y: f32) -> (i32, i32) {
        // Negative extents would invert the clamp range
        let max_x = self.screen_width.max(0);
        let max_y = self.screen_height.max(0);

        let screen_x = ((x * self.scale_x) as i32).clamp(0, max_x);
        let screen_y = ((y * self.scale_y) as i32).clamp(0, max_y);

        (screen_x, screen_y)
    }
}

impl Default for RenderData {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
