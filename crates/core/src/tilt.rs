//! Pointer-driven tilt for project cards.
//!
//! While the pointer hovers a card, its position inside the card's live
//! bounding rect maps to a small rotation around both in-plane axes; when
//! the pointer leaves, the card snaps back to neutral. The whole interaction
//! is a cosmetic layer: nothing here can fail in a way the page would show.
//!
//! Renderers own the surfaces. The controller only reads geometry and writes
//! orientation — it never touches layout, count, or identity.

use std::cell::Cell;
use std::rc::Rc;

use folio_glass_protocol::{Orientation, Point, Rect};

/// Maximum rotation in degrees around the horizontal (X) axis.
pub const MAX_TILT_X: f64 = 6.0;
/// Maximum rotation in degrees around the vertical (Y) axis.
pub const MAX_TILT_Y: f64 = 6.0;

/// A card surface as the tilt controller sees it.
///
/// `bounds` is re-queried on every sample since layout may shift between
/// events; `None` means the surface has left the rendered tree, which makes
/// every operation on it a no-op.
pub trait SurfaceHandle {
    fn bounds(&self) -> Option<Rect>;
    fn set_orientation(&self, orientation: Orientation);
}

/// Shared-cell surface used by all renderers (and tests): the render pass
/// writes the laid-out rect each frame, the next pass reads the orientation
/// back when emitting the card's commands.
#[derive(Debug, Default)]
pub struct CardSlot {
    rect: Cell<Option<Rect>>,
    orientation: Cell<Orientation>,
}

impl CardSlot {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn set_rect(&self, rect: Option<Rect>) {
        self.rect.set(rect);
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation.get()
    }
}

impl SurfaceHandle for CardSlot {
    fn bounds(&self) -> Option<Rect> {
        self.rect.get()
    }

    fn set_orientation(&self, orientation: Orientation) {
        self.orientation.set(orientation);
    }
}

/// Subscribe the tilt behavior to a set of card surfaces.
///
/// Zero surfaces is legal and yields an empty registration. Infallible.
pub fn activate(surfaces: Vec<Rc<dyn SurfaceHandle>>) -> TiltRegistration {
    TiltRegistration {
        surfaces,
        hovered: None,
        disposed: false,
    }
}

/// All bindings created by one [`activate`] call, disposed as a unit.
///
/// Events are processed strictly in call order; after [`dispose`] returns,
/// no delivery mutates any surface.
///
/// [`dispose`]: TiltRegistration::dispose
pub struct TiltRegistration {
    surfaces: Vec<Rc<dyn SurfaceHandle>>,
    hovered: Option<usize>,
    disposed: bool,
}

impl TiltRegistration {
    /// Number of live surface bindings (zero once disposed).
    pub fn binding_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// A pointer sample over the surface at `index`.
    ///
    /// Re-queries the surface's bounds; samples against an unmounted or
    /// not-yet-laid-out (zero-sized) surface leave its orientation unchanged.
    /// Both axes are written together — no single-axis state is observable.
    pub fn pointer_moved(&mut self, index: usize, position: Point) {
        if self.disposed {
            return;
        }
        let Some(surface) = self.surfaces.get(index) else {
            return;
        };
        let Some(rect) = surface.bounds() else {
            return;
        };
        if rect.is_degenerate() {
            return;
        }
        let center = rect.center();
        let dx = position.x - center.x;
        let dy = position.y - center.y;
        // Vertical displacement drives the negated X axis so the card tips
        // toward the pointer. Samples outside the rect clamp at the maximum.
        let rotate_x = (-dy / (rect.h / 2.0) * MAX_TILT_X).clamp(-MAX_TILT_X, MAX_TILT_X);
        let rotate_y = (dx / (rect.w / 2.0) * MAX_TILT_Y).clamp(-MAX_TILT_Y, MAX_TILT_Y);
        surface.set_orientation(Orientation::new(rotate_x, rotate_y));
        self.hovered = Some(index);
    }

    /// The pointer left the surface at `index`: reset to neutral
    /// unconditionally, regardless of pointer history.
    pub fn pointer_left(&mut self, index: usize) {
        if self.disposed {
            return;
        }
        if let Some(surface) = self.surfaces.get(index) {
            surface.set_orientation(Orientation::NEUTRAL);
        }
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    /// Polled dispatch for renderers that report one pointer position per
    /// frame instead of per-surface events: hit-tests the live bounds and
    /// derives the move/leave transitions, last sample winning.
    pub fn track(&mut self, pointer: Option<Point>) {
        if self.disposed {
            return;
        }
        let hit = pointer.and_then(|p| {
            self.surfaces
                .iter()
                .position(|s| s.bounds().is_some_and(|r| !r.is_degenerate() && r.contains(p)))
        });
        if let Some(previous) = self.hovered
            && hit != Some(previous)
        {
            self.pointer_left(previous);
        }
        if let (Some(index), Some(position)) = (hit, pointer) {
            self.pointer_moved(index, position);
        }
        self.hovered = hit;
    }

    /// Remove every binding and reset all still-mounted surfaces to
    /// neutral. Idempotent; synchronous — once this returns, no event
    /// delivery (queued or otherwise) reaches a surface.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        for surface in &self.surfaces {
            if surface.bounds().is_some() {
                surface.set_orientation(Orientation::NEUTRAL);
            }
        }
        self.surfaces.clear();
        self.hovered = None;
    }
}

impl Drop for TiltRegistration {
    fn drop(&mut self) {
        self.dispose();
    }
}
