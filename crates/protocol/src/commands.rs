use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Orientation, Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` for the page. Renderers consume the
/// list sequentially — each command carries all the data it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled, optionally rounded rectangle. A `card_id` marks the
    /// rect as an interactive card surface for hit-testing.
    DrawRect {
        rect: Rect,
        fill: ThemeToken,
        border: Option<ThemeToken>,
        radius: f64,
        card_id: Option<u64>,
    },

    /// Draw a text string at a position.
    DrawText {
        position: Point,
        text: SharedStr,
        color: ThemeToken,
        font_size: f64,
        align: TextAlign,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
    },

    /// Restrict subsequent drawing to a rectangular region.
    SetClip { rect: Rect },

    /// Remove the active clip region.
    ClearClip,

    /// Push an affine transform (applied to all subsequent commands until
    /// the matching `PopTransform`).
    PushTransform { translate: Point, scale: Point },

    /// Push a tilt: subsequent commands are drawn as if the plane were
    /// rotated by `orientation` about `origin`. Renderers approximate the
    /// perspective however their backend allows. Popped by `PopTransform`.
    PushTilt {
        origin: Point,
        orientation: Orientation,
    },

    /// Pop the most recent transform or tilt.
    PopTransform,

    /// Begin a logical group (e.g. a section). Renderers may use this for
    /// batching or to substitute live widgets (the hero's scene slot).
    BeginGroup {
        id: SharedStr,
        label: Option<SharedStr>,
    },

    /// End the current group.
    EndGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}
