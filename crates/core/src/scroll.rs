//! Smooth anchor scrolling.
//!
//! Sections are stacked vertically; the navbar asks for a section by id and
//! the scroll offset eases toward its top. Navigation is best-effort — an
//! unknown id simply does nothing.

use crate::content::SectionId;

/// Exponential easing rate, per second. Higher is snappier.
const EASE_RATE: f64 = 8.0;
/// Distance at which the target counts as reached, in page units.
const SETTLE_EPSILON: f64 = 0.5;

/// Ordered `(section, top, height)` produced by page layout.
#[derive(Debug, Clone, Default)]
pub struct SectionMap {
    entries: Vec<(SectionId, f64, f64)>,
}

impl SectionMap {
    pub fn push(&mut self, id: SectionId, top: f64, height: f64) {
        self.entries.push((id, top, height));
    }

    pub fn offset_of(&self, id: SectionId) -> Option<f64> {
        self.entries
            .iter()
            .find(|(section, _, _)| *section == id)
            .map(|&(_, top, _)| top)
    }

    /// The section whose extent covers the given page offset.
    pub fn section_at(&self, offset: f64) -> Option<SectionId> {
        self.entries
            .iter()
            .find(|&&(_, top, height)| offset >= top && offset < top + height)
            .map(|&(id, _, _)| id)
    }

    pub fn total_height(&self) -> f64 {
        self.entries
            .last()
            .map_or(0.0, |&(_, top, height)| top + height)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Eased scroll offset with an optional in-flight target.
#[derive(Debug, Clone, Default)]
pub struct SmoothScroll {
    offset: f64,
    target: Option<f64>,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Jump without animation (wheel/drag input takes over directly).
    pub fn set_immediate(&mut self, offset: f64) {
        self.offset = offset.max(0.0);
        self.target = None;
    }

    /// Begin easing toward an absolute offset.
    pub fn scroll_to(&mut self, offset: f64) {
        self.target = Some(offset.max(0.0));
    }

    /// Begin easing toward a section's top. Missing sections are ignored.
    pub fn scroll_to_section(&mut self, map: &SectionMap, id: SectionId) {
        if let Some(top) = map.offset_of(id) {
            self.scroll_to(top);
        }
    }

    /// Advance the animation by `dt` seconds and return the new offset.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if let Some(target) = self.target {
            let remaining = target - self.offset;
            if remaining.abs() <= SETTLE_EPSILON {
                self.offset = target;
                self.target = None;
            } else {
                let step = 1.0 - (-EASE_RATE * dt.max(0.0)).exp();
                self.offset += remaining * step;
            }
        }
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> SectionMap {
        let mut m = SectionMap::default();
        m.push(SectionId::Home, 0.0, 800.0);
        m.push(SectionId::About, 800.0, 400.0);
        m.push(SectionId::Projects, 1200.0, 600.0);
        m
    }

    #[test]
    fn offsets_and_lookup() {
        let m = map();
        assert_eq!(m.offset_of(SectionId::About), Some(800.0));
        assert_eq!(m.offset_of(SectionId::Contact), None);
        assert_eq!(m.section_at(900.0), Some(SectionId::About));
        assert_eq!(m.section_at(5000.0), None);
        assert!((m.total_height() - 1800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn eases_toward_target_and_settles() {
        let mut scroll = SmoothScroll::new();
        scroll.scroll_to(1000.0);
        let mut last = 0.0;
        for _ in 0..200 {
            let offset = scroll.tick(1.0 / 60.0);
            assert!(offset >= last);
            last = offset;
            if !scroll.is_animating() {
                break;
            }
        }
        assert!(!scroll.is_animating());
        assert!((scroll.offset() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_section_is_a_noop() {
        let mut scroll = SmoothScroll::new();
        scroll.scroll_to_section(&map(), SectionId::Contact);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(0.016), 0.0);
    }

    #[test]
    fn immediate_set_cancels_animation() {
        let mut scroll = SmoothScroll::new();
        scroll.scroll_to(500.0);
        scroll.tick(0.016);
        scroll.set_immediate(120.0);
        assert!(!scroll.is_animating());
        assert!((scroll.offset() - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn offset_never_goes_negative() {
        let mut scroll = SmoothScroll::new();
        scroll.set_immediate(-50.0);
        assert_eq!(scroll.offset(), 0.0);
        scroll.scroll_to(-10.0);
        for _ in 0..10 {
            scroll.tick(0.016);
        }
        assert!(scroll.offset() >= 0.0);
    }
}
