use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    BackdropGlowTop,
    BackdropGlowBottom,
    Surface,
    Border,

    NavBackground,
    NavBorder,
    BrandAccent,

    TextPrimary,
    TextSecondary,
    TextMuted,

    AccentCyan,
    AccentIndigo,
    AccentFuchsia,

    ButtonPrimary,
    ButtonPrimaryText,
    ButtonGhost,
    ButtonGhostBorder,

    CardSurface,
    CardBorder,
    CardGlow,
    CardMedia,

    TileCyan,
    TileIndigo,
    TileFuchsia,
    TileSky,
    TileViolet,
    TilePurple,

    SceneBackdrop,
    SceneWire,

    FormField,
    FormFieldBorder,

    HoverHighlight,
    FooterText,
}
