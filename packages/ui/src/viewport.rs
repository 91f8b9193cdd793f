//! Scroll geometry, decoupled from any particular document or window.

use dioxus::prelude::*;

/// Scroll position of a scrollable area, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    /// Visible height of the scroll area.
    pub viewport_height: f64,
    /// Distance scrolled from the top.
    pub scroll_top: f64,
    /// Total height of the scrollable content.
    pub content_height: f64,
}

impl ViewportMetrics {
    pub fn new(viewport_height: f64, scroll_top: f64, content_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_top,
            content_height,
        }
    }

    /// Pixels left between the bottom of the viewport and the end of the
    /// content. Negative when overscrolled.
    pub fn distance_to_bottom(&self) -> f64 {
        self.content_height - (self.scroll_top + self.viewport_height)
    }

    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.distance_to_bottom() <= threshold
    }
}

/// Anything that can report current scroll metrics.
pub trait ViewportProvider {
    fn metrics(&self) -> ViewportMetrics;
}

impl ViewportProvider for ViewportMetrics {
    fn metrics(&self) -> ViewportMetrics {
        *self
    }
}

impl ViewportProvider for ScrollData {
    fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics {
            viewport_height: f64::from(self.client_height()),
            scroll_top: f64::from(self.scroll_top()),
            content_height: f64::from(self.scroll_height()),
        }
    }
}

/// Read the current metrics of a mounted scroll container. `None` when the
/// renderer cannot report geometry.
pub async fn measure(element: &MountedData) -> Option<ViewportMetrics> {
    let rect = element.get_client_rect().await.ok()?;
    let size = element.get_scroll_size().await.ok()?;
    let offset = element.get_scroll_offset().await.ok()?;
    Some(ViewportMetrics::new(rect.height(), offset.y, size.height))
}
