//! Host-driven bridge: the embedding page owns the canvas and the event
//! loop, this crate owns layout, scrolling, and the tilt lifecycle.
//!
//! All pointer coordinates cross the boundary in page space — the host
//! adds its scroll offset before calling in.

use std::cell::RefCell;
use std::rc::Rc;

use folio_glass_core::content::{SectionId, SiteContent};
use folio_glass_core::lifecycle::PageLifecycle;
use folio_glass_core::scroll::{SectionMap, SmoothScroll};
use folio_glass_core::svg::render_svg;
use folio_glass_core::tilt::{CardSlot, SurfaceHandle};
use folio_glass_core::views::navbar::render_navbar;
use folio_glass_core::views::page::{card_regions, layout_page};
use folio_glass_protocol::{Orientation, Point, RenderCommand};
use serde::Serialize;
use wasm_bindgen::prelude::*;

struct PageState {
    content: SiteContent,
    lifecycle: PageLifecycle,
    slots: Vec<Rc<CardSlot>>,
    scroll: SmoothScroll,
    sections: SectionMap,
}

impl PageState {
    fn new(content: SiteContent) -> Self {
        Self {
            content,
            lifecycle: PageLifecycle::new(),
            slots: Vec::new(),
            scroll: SmoothScroll::new(),
            sections: SectionMap::default(),
        }
    }
}

// The tilt surfaces are Rc-shared, so state lives on the wasm thread
// rather than behind a Mutex.
thread_local! {
    static PAGE: RefCell<Option<PageState>> = const { RefCell::new(None) };
}

fn with_page<T>(f: impl FnOnce(&mut PageState) -> Result<T, JsError>) -> Result<T, JsError> {
    PAGE.with(|page| {
        let mut page = page.borrow_mut();
        let state = page
            .as_mut()
            .ok_or_else(|| JsError::new("page not initialized"))?;
        f(state)
    })
}

#[derive(Serialize)]
struct PageFrame {
    /// Viewport-space commands for the fixed navigation bar.
    navbar: Vec<RenderCommand>,
    /// Page-space commands for the scrollable content.
    page: Vec<RenderCommand>,
    height: f64,
    scroll_offset: f64,
    animating: bool,
}

/// Mount the page with the built-in content. Remounting replaces the
/// previous page and disposes its tilt bindings.
#[wasm_bindgen]
pub fn init_page() {
    PAGE.with(|page| {
        *page.borrow_mut() = Some(PageState::new(SiteContent::default_content()));
    });
}

/// Replace the page content from a JSON document.
#[wasm_bindgen]
pub fn load_content(data: &[u8]) -> Result<(), JsError> {
    let content = SiteContent::from_json(data).map_err(|e| JsError::new(&e.to_string()))?;
    PAGE.with(|page| {
        *page.borrow_mut() = Some(PageState::new(content));
    });
    Ok(())
}

/// Lay out one frame and return it as JSON. Remounts the tilt lifecycle
/// whenever the card set changes, and refreshes every card's live bounds.
#[wasm_bindgen]
pub fn render_page(width: f64) -> Result<String, JsError> {
    with_page(|state| {
        if state.slots.len() != state.content.projects.len() {
            state.slots = (0..state.content.projects.len())
                .map(|_| CardSlot::new())
                .collect();
            state.lifecycle.mount(
                state
                    .slots
                    .iter()
                    .map(|s| s.clone() as Rc<dyn SurfaceHandle>)
                    .collect(),
            );
        }

        let orientations: Vec<Orientation> = state.slots.iter().map(|s| s.orientation()).collect();
        let page = layout_page(&state.content, width, &orientations);
        for (id, rect) in card_regions(&page.commands) {
            if let Some(slot) = state.slots.get(id as usize) {
                slot.set_rect(Some(rect));
            }
        }
        state.sections = page.sections.clone();

        let frame = PageFrame {
            navbar: render_navbar(&state.content, width),
            page: page.commands,
            height: page.height,
            scroll_offset: state.scroll.offset(),
            animating: state.scroll.is_animating(),
        };
        serde_json::to_string(&frame).map_err(|e| JsError::new(&e.to_string()))
    })
}

/// A pointer sample in page coordinates. Hit-testing and enter/leave
/// transitions are derived internally.
#[wasm_bindgen]
pub fn pointer_moved(x: f64, y: f64) -> Result<(), JsError> {
    with_page(|state| {
        if let Some(reg) = state.lifecycle.registration_mut() {
            reg.track(Some(Point::new(x, y)));
        }
        Ok(())
    })
}

/// The pointer left the page entirely.
#[wasm_bindgen]
pub fn pointer_left() -> Result<(), JsError> {
    with_page(|state| {
        if let Some(reg) = state.lifecycle.registration_mut() {
            reg.track(None);
        }
        Ok(())
    })
}

/// Begin easing toward the section with the given anchor ("about",
/// "projects", ...). Unknown anchors are ignored.
#[wasm_bindgen]
pub fn scroll_to_anchor(anchor: &str) -> Result<(), JsError> {
    with_page(|state| {
        if let Some(section) = SectionId::from_anchor(anchor) {
            state.scroll.scroll_to_section(&state.sections, section);
        }
        Ok(())
    })
}

/// Jump the scroll offset without animation (wheel input).
#[wasm_bindgen]
pub fn set_scroll(offset: f64) -> Result<(), JsError> {
    with_page(|state| {
        state.scroll.set_immediate(offset);
        Ok(())
    })
}

/// Advance the scroll animation by `dt` seconds; returns the new offset.
#[wasm_bindgen]
pub fn tick(dt: f64) -> Result<f64, JsError> {
    with_page(|state| Ok(state.scroll.tick(dt)))
}

/// Render the current page as a standalone SVG document.
#[wasm_bindgen]
pub fn export_svg(width: f64, dark: bool) -> Result<String, JsError> {
    with_page(|state| {
        let orientations: Vec<Orientation> = state.slots.iter().map(|s| s.orientation()).collect();
        let page = layout_page(&state.content, width, &orientations);
        Ok(render_svg(&page.commands, width, page.height, dark))
    })
}

/// Unmount the page: disposes every tilt binding and drops all state.
/// Safe to call repeatedly.
#[wasm_bindgen]
pub fn dispose_page() {
    PAGE.with(|page| {
        if let Some(mut state) = page.borrow_mut().take() {
            state.lifecycle.unmount();
        }
    });
}
