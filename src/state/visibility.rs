//! Sentinel Visibility
//!
//! Intersection of an element with the scroll viewport, reduced to the
//! vertical axis since the catalog only scrolls vertically.

/// Vertical extent of an element in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSpan {
    pub top: f32,
    pub bottom: f32,
}

impl VerticalSpan {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }
}

/// Fraction of `target` that lies inside `viewport`, in `0.0..=1.0`
pub fn intersection_ratio(viewport: VerticalSpan, target: VerticalSpan) -> f32 {
    let height = target.height();
    if height <= 0.0 {
        let inside = target.top >= viewport.top && target.top <= viewport.bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    let top = viewport.top.max(target.top);
    let bottom = viewport.bottom.min(target.bottom);
    ((bottom - top).max(0.0) / height).clamp(0.0, 1.0)
}

/// Reports visibility of a single element, once per change
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: f32,
    last: Option<bool>,
}

impl VisibilityObserver {
    /// `threshold` is the minimum intersection ratio counted as visible
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            last: None,
        }
    }

    /// Record the latest layout, returning the new visibility if it changed
    pub fn observe(&mut self, viewport: VerticalSpan, target: VerticalSpan) -> Option<bool> {
        // Sub-pixel layout rounding must not keep a fully scrolled-in sentinel hidden.
        let visible = intersection_ratio(viewport, target) + 1e-3 >= self.threshold;
        if self.last == Some(visible) {
            return None;
        }
        self.last = Some(visible);
        Some(visible)
    }

    /// Forget the last report so the next layout is reported even if unchanged
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_covers_outside_partial_and_full() {
        let viewport = VerticalSpan::new(0.0, 800.0);

        assert_eq!(intersection_ratio(viewport, VerticalSpan::new(900.0, 940.0)), 0.0);
        assert_eq!(intersection_ratio(viewport, VerticalSpan::new(780.0, 820.0)), 0.5);
        assert_eq!(intersection_ratio(viewport, VerticalSpan::new(700.0, 740.0)), 1.0);
    }

    #[test]
    fn zero_height_target_is_visible_only_inside() {
        let viewport = VerticalSpan::new(0.0, 100.0);
        assert_eq!(intersection_ratio(viewport, VerticalSpan::new(50.0, 50.0)), 1.0);
        assert_eq!(intersection_ratio(viewport, VerticalSpan::new(150.0, 150.0)), 0.0);
    }

    #[test]
    fn full_threshold_ignores_partially_visible_sentinel() {
        let mut observer = VisibilityObserver::new(1.0);
        let viewport = VerticalSpan::new(0.0, 800.0);

        assert_eq!(observer.observe(viewport, VerticalSpan::new(790.0, 830.0)), Some(false));
        assert_eq!(observer.observe(viewport, VerticalSpan::new(770.0, 810.0)), None);
        assert_eq!(observer.observe(viewport, VerticalSpan::new(760.0, 800.0)), Some(true));
        assert_eq!(observer.observe(viewport, VerticalSpan::new(700.0, 740.0)), None);
        assert_eq!(observer.observe(viewport, VerticalSpan::new(900.0, 940.0)), Some(false));
    }

    #[test]
    fn reset_reports_unchanged_visibility_again() {
        let mut observer = VisibilityObserver::new(1.0);
        let viewport = VerticalSpan::new(0.0, 800.0);
        let sentinel = VerticalSpan::new(700.0, 740.0);

        assert_eq!(observer.observe(viewport, sentinel), Some(true));
        assert_eq!(observer.observe(viewport, sentinel), None);

        observer.reset();
        assert_eq!(observer.observe(viewport, sentinel), Some(true));
        assert_eq!(observer.observe(viewport, sentinel), None);
    }
}
