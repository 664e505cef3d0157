//! Colors - Catalog Theme Colors

use gpui::{rgb, Rgba};

/// Catalog color palette - All colors are accessed via associated functions
pub struct CatalogColors;

impl CatalogColors {
    // Background colors
    /// Page background - Gray 50
    pub fn background() -> Rgba { rgb(0xf9fafb) }
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Thumbnail placeholder while the image loads
    pub fn image_placeholder() -> Rgba { rgb(0xf3f4f6) }

    // Text colors
    /// Page title - Blue 600
    pub fn title() -> Rgba { rgb(0x2563eb) }
    /// Card title - Gray 800
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Card description - Gray 500
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text - Gray 400
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Price - Blue 600
    pub fn price() -> Rgba { rgb(0x2563eb) }

    // Accents
    /// Loading indicator - Blue 500
    pub fn spinner() -> Rgba { rgb(0x3b82f6) }
    /// Card border on hover
    pub fn card_hover_border() -> Rgba { rgb(0xbfdbfe) }
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
}
