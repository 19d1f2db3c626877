//! Integration test: lay out the full page, wire the project cards to the
//! tilt controller through shared card slots, and drive the whole
//! mount → hover → unmount cycle the way a renderer would.

use std::rc::Rc;

use folio_glass_core::content::{SectionId, SiteContent};
use folio_glass_core::lifecycle::PageLifecycle;
use folio_glass_core::scroll::SmoothScroll;
use folio_glass_core::tilt::{CardSlot, SurfaceHandle};
use folio_glass_core::views::page::{card_regions, layout_page};
use folio_glass_protocol::Point;

#[test]
fn full_page_hover_cycle() {
    let content = SiteContent::default_content();
    let page_width = 1280.0;

    // First layout pass: everything neutral.
    let page = layout_page(&content, page_width, &[]);
    let regions = card_regions(&page.commands);
    assert_eq!(regions.len(), content.projects.len());

    // Renderer-side surfaces: one slot per card, rects from the layout.
    let slots: Vec<Rc<CardSlot>> = (0..regions.len()).map(|_| CardSlot::new()).collect();
    for (slot, (_, rect)) in slots.iter().zip(&regions) {
        slot.set_rect(Some(*rect));
    }

    let mut lifecycle = PageLifecycle::new();
    lifecycle.mount(
        slots
            .iter()
            .map(|s| s.clone() as Rc<dyn SurfaceHandle>)
            .collect(),
    );
    assert_eq!(lifecycle.active_bindings(), content.projects.len());

    // Hover the first card off-center: it tilts, the others stay neutral.
    let (_, first) = regions[0];
    let pointer = Point::new(first.x + first.w * 0.75, first.y + first.h * 0.25);
    lifecycle
        .registration_mut()
        .unwrap()
        .track(Some(pointer));
    assert!(!slots[0].orientation().is_neutral());
    assert!(slots[1..].iter().all(|s| s.orientation().is_neutral()));

    // The next layout pass sees the tilt.
    let orientations: Vec<_> = slots.iter().map(|s| s.orientation()).collect();
    let tilted = layout_page(&content, page_width, &orientations);
    let tilted_regions = card_regions(&tilted.commands);
    assert_eq!(tilted_regions.len(), regions.len());

    // Pointer moves off the grid: back to neutral.
    lifecycle
        .registration_mut()
        .unwrap()
        .track(Some(Point::new(10.0, 10.0)));
    assert!(slots.iter().all(|s| s.orientation().is_neutral()));

    // Hover again, then unmount: neutral and fully released.
    lifecycle.registration_mut().unwrap().track(Some(pointer));
    assert!(!slots[0].orientation().is_neutral());
    lifecycle.unmount();
    assert!(slots.iter().all(|s| s.orientation().is_neutral()));
    assert_eq!(lifecycle.active_bindings(), 0);
}

#[test]
fn remounts_track_the_live_card_count() {
    let mut content = SiteContent::default_content();
    let page_width = 1280.0;
    let mut lifecycle = PageLifecycle::new();

    for _ in 0..3 {
        let page = layout_page(&content, page_width, &[]);
        let regions = card_regions(&page.commands);
        let slots: Vec<Rc<dyn SurfaceHandle>> = regions
            .iter()
            .map(|(_, rect)| {
                let slot = CardSlot::new();
                slot.set_rect(Some(*rect));
                slot as Rc<dyn SurfaceHandle>
            })
            .collect();
        lifecycle.mount(slots);
        assert_eq!(lifecycle.active_bindings(), content.projects.len());

        // Grow the grid between mounts.
        content.projects.push(content.projects[0].clone());
    }
}

#[test]
fn navbar_click_scrolls_to_the_projects_grid() {
    let content = SiteContent::default_content();
    let page = layout_page(&content, 1280.0, &[]);

    let mut scroll = SmoothScroll::new();
    scroll.scroll_to_section(&page.sections, SectionId::Projects);
    for _ in 0..600 {
        scroll.tick(1.0 / 60.0);
        if !scroll.is_animating() {
            break;
        }
    }
    assert!(!scroll.is_animating());
    let expected = page.sections.offset_of(SectionId::Projects).unwrap();
    assert!((scroll.offset() - expected).abs() < f64::EPSILON);
    assert_eq!(page.sections.section_at(scroll.offset()), Some(SectionId::Projects));
}
