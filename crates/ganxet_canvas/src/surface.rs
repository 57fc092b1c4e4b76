//! Surface sizing
//!
//! Tracks the host element's logical layout box and the device pixel ratio.
//! The renderer records in logical coordinates; the physical size is what a
//! compositor allocates for its buffers.

use ganxet_core::Size;
use tracing::debug;

#[derive(Clone, Copy, Debug)]
pub struct Surface {
    logical: Size,
    device_pixel_ratio: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            logical: Size::new(width.max(0.0), height.max(0.0)),
            device_pixel_ratio: device_pixel_ratio.max(1.0),
        }
    }

    /// Apply a new layout box / pixel ratio. Returns whether anything
    /// changed (callers invalidate static layers on `true`).
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) -> bool {
        let next = Self::new(width, height, device_pixel_ratio);
        if next.logical == self.logical && next.device_pixel_ratio == self.device_pixel_ratio {
            return false;
        }
        debug!(
            width = next.logical.width,
            height = next.logical.height,
            dpr = next.device_pixel_ratio,
            "surface: resized"
        );
        *self = next;
        true
    }

    pub fn logical(&self) -> Size {
        self.logical
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Buffer size in device pixels.
    pub fn physical(&self) -> Size {
        Size::new(
            self.logical.width * self.device_pixel_ratio,
            self.logical.height * self.device_pixel_ratio,
        )
    }
}
