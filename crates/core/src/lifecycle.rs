//! Root composition lifecycle: `Unmounted → Mounted → Unmounted`.
//!
//! The page owns exactly one tilt registration while mounted. Mounting
//! activates it, unmounting disposes it; both transitions are symmetric and
//! safe to repeat, so remounts can never leak bindings or double-activate.

use std::rc::Rc;

use crate::tilt::{self, SurfaceHandle, TiltRegistration};

/// Owns the tilt registration for the currently mounted page.
#[derive(Default)]
pub struct PageLifecycle {
    registration: Option<TiltRegistration>,
}

impl PageLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.registration.is_some()
    }

    /// Transition into `Mounted` over the given card surfaces.
    ///
    /// If a registration is already active it is disposed first, so calling
    /// mount on a mounted page is a guarded remount, not a fault.
    pub fn mount(&mut self, surfaces: Vec<Rc<dyn SurfaceHandle>>) {
        if let Some(mut previous) = self.registration.take() {
            previous.dispose();
        }
        self.registration = Some(tilt::activate(surfaces));
    }

    /// Transition out of `Mounted`. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(mut registration) = self.registration.take() {
            registration.dispose();
        }
    }

    /// The active registration, for event delivery.
    pub fn registration_mut(&mut self) -> Option<&mut TiltRegistration> {
        self.registration.as_mut()
    }

    /// Invariant surface: must equal the number of mounted card surfaces,
    /// and zero after teardown.
    pub fn active_bindings(&self) -> usize {
        self.registration
            .as_ref()
            .map_or(0, TiltRegistration::binding_count)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use folio_glass_protocol::{Orientation, Rect};

    use super::*;

    #[derive(Default)]
    struct StubSurface {
        orientation: Cell<Orientation>,
    }

    impl SurfaceHandle for StubSurface {
        fn bounds(&self) -> Option<Rect> {
            Some(Rect::new(0.0, 0.0, 10.0, 10.0))
        }

        fn set_orientation(&self, orientation: Orientation) {
            self.orientation.set(orientation);
        }
    }

    fn surfaces(n: usize) -> Vec<Rc<dyn SurfaceHandle>> {
        (0..n)
            .map(|_| Rc::new(StubSurface::default()) as Rc<dyn SurfaceHandle>)
            .collect()
    }

    #[test]
    fn mount_binds_every_surface() {
        let mut lifecycle = PageLifecycle::new();
        assert!(!lifecycle.is_mounted());
        lifecycle.mount(surfaces(3));
        assert!(lifecycle.is_mounted());
        assert_eq!(lifecycle.active_bindings(), 3);
    }

    #[test]
    fn unmount_releases_everything() {
        let mut lifecycle = PageLifecycle::new();
        lifecycle.mount(surfaces(3));
        lifecycle.unmount();
        assert!(!lifecycle.is_mounted());
        assert_eq!(lifecycle.active_bindings(), 0);

        // Idempotent.
        lifecycle.unmount();
        assert_eq!(lifecycle.active_bindings(), 0);
    }

    #[test]
    fn remount_does_not_accumulate_bindings() {
        let mut lifecycle = PageLifecycle::new();
        lifecycle.mount(surfaces(3));
        lifecycle.mount(surfaces(3));
        assert_eq!(lifecycle.active_bindings(), 3);

        lifecycle.unmount();
        lifecycle.mount(surfaces(2));
        assert_eq!(lifecycle.active_bindings(), 2);
    }

    #[test]
    fn remount_disposes_the_previous_registration() {
        let first = Rc::new(StubSurface::default());
        let mut lifecycle = PageLifecycle::new();
        lifecycle.mount(vec![first.clone() as Rc<dyn SurfaceHandle>]);
        if let Some(reg) = lifecycle.registration_mut() {
            reg.pointer_moved(0, folio_glass_protocol::Point::new(0.0, 0.0));
        }
        assert!(!first.orientation.get().is_neutral());

        lifecycle.mount(surfaces(1));
        assert_eq!(first.orientation.get(), Orientation::NEUTRAL);
    }

    #[test]
    fn mounting_zero_surfaces_is_legal() {
        let mut lifecycle = PageLifecycle::new();
        lifecycle.mount(Vec::new());
        assert!(lifecycle.is_mounted());
        assert_eq!(lifecycle.active_bindings(), 0);
    }
}
