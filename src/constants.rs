//! UI and Catalog Constants
//!
//! Centralized constants for consistent layout and paging across the application.

/// Number of products requested per page
pub const PAGE_SIZE: u32 = 10;

/// Failed page offsets remembered for diagnostics
pub const SKIPPED_OFFSETS_CAPACITY: usize = 32;

/// Default products endpoint
pub const DEFAULT_API_URL: &str = "https://dummyjson.com/products";

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// Sentinel height in pixels
pub const SENTINEL_HEIGHT: f32 = 40.0;

/// Fraction of the sentinel that must be inside the viewport to count as visible
pub const SENTINEL_THRESHOLD: f32 = 1.0;

/// Grid breakpoints (content width in pixels)
pub const GRID_BREAKPOINT_SM: f32 = 640.0;
pub const GRID_BREAKPOINT_MD: f32 = 768.0;
pub const GRID_BREAKPOINT_LG: f32 = 1024.0;

/// Maximum width of the product grid
pub const GRID_MAX_WIDTH: f32 = 1152.0;

/// Gap between grid cells
pub const GRID_GAP: f32 = 24.0;

/// Product card thumbnail height
pub const CARD_IMAGE_HEIGHT: f32 = 192.0;

/// Page padding around the grid
pub const PAGE_PADDING: f32 = 24.0;
