use folio_glass_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Slate / cyan / fuchsia, tuned for glassmorphism on a deep navy base
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x0b, 0x10, 0x20),
        BackdropGlowTop => ResolvedColor::rgba(0x22, 0xd3, 0xee, 26),
        BackdropGlowBottom => ResolvedColor::rgba(0xe8, 0x79, 0xf9, 22),
        Surface => ResolvedColor::rgb(0x10, 0x17, 0x29),
        Border => ResolvedColor::rgb(0x24, 0x30, 0x49),

        NavBackground => ResolvedColor::rgba(0x10, 0x17, 0x29, 216),
        NavBorder => ResolvedColor::rgb(0x24, 0x30, 0x49),
        BrandAccent => ResolvedColor::rgb(0x22, 0xd3, 0xee),

        TextPrimary => ResolvedColor::rgb(0xe6, 0xed, 0xf7),
        TextSecondary => ResolvedColor::rgb(0x94, 0xa3, 0xb8),
        TextMuted => ResolvedColor::rgb(0x64, 0x74, 0x8b),

        AccentCyan => ResolvedColor::rgb(0x22, 0xd3, 0xee),
        AccentIndigo => ResolvedColor::rgb(0x81, 0x8c, 0xf8),
        AccentFuchsia => ResolvedColor::rgb(0xe8, 0x79, 0xf9),

        ButtonPrimary => ResolvedColor::rgb(0x22, 0xd3, 0xee),
        ButtonPrimaryText => ResolvedColor::rgb(0x06, 0x12, 0x1f),
        ButtonGhost => ResolvedColor::rgba(0x13, 0x1c, 0x33, 200),
        ButtonGhostBorder => ResolvedColor::rgb(0x2b, 0x3a, 0x5c),

        CardSurface => ResolvedColor::rgba(0x12, 0x1a, 0x30, 230),
        CardBorder => ResolvedColor::rgb(0x26, 0x34, 0x5a),
        CardGlow => ResolvedColor::rgba(0x38, 0xbd, 0xf8, 60),
        CardMedia => ResolvedColor::rgb(0x1a, 0x25, 0x46),

        TileCyan => ResolvedColor::rgb(0x15, 0x5e, 0x75),
        TileIndigo => ResolvedColor::rgb(0x37, 0x30, 0xa3),
        TileFuchsia => ResolvedColor::rgb(0x86, 0x19, 0x8f),
        TileSky => ResolvedColor::rgb(0x07, 0x59, 0x85),
        TileViolet => ResolvedColor::rgb(0x5b, 0x21, 0xb6),
        TilePurple => ResolvedColor::rgb(0x6b, 0x21, 0xa8),

        SceneBackdrop => ResolvedColor::rgb(0x0e, 0x15, 0x30),
        SceneWire => ResolvedColor::rgb(0x38, 0xbd, 0xf8),

        FormField => ResolvedColor::rgb(0x0f, 0x18, 0x2e),
        FormFieldBorder => ResolvedColor::rgb(0x24, 0x32, 0x4f),

        HoverHighlight => ResolvedColor::rgba(0x38, 0xbd, 0xf8, 30),
        FooterText => ResolvedColor::rgb(0x64, 0x74, 0x8b),
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0xf6, 0xf8, 0xfc),
        BackdropGlowTop => ResolvedColor::rgba(0x0e, 0xa5, 0xe9, 24),
        BackdropGlowBottom => ResolvedColor::rgba(0xc0, 0x26, 0xd3, 18),
        Surface => ResolvedColor::rgb(0xff, 0xff, 0xff),
        Border => ResolvedColor::rgb(0xdd, 0xe3, 0xee),

        NavBackground => ResolvedColor::rgba(0xff, 0xff, 0xff, 224),
        NavBorder => ResolvedColor::rgb(0xdd, 0xe3, 0xee),
        BrandAccent => ResolvedColor::rgb(0x08, 0x91, 0xb2),

        TextPrimary => ResolvedColor::rgb(0x0f, 0x17, 0x2a),
        TextSecondary => ResolvedColor::rgb(0x47, 0x55, 0x69),
        TextMuted => ResolvedColor::rgb(0x94, 0xa3, 0xb8),

        AccentCyan => ResolvedColor::rgb(0x08, 0x91, 0xb2),
        AccentIndigo => ResolvedColor::rgb(0x4f, 0x46, 0xe5),
        AccentFuchsia => ResolvedColor::rgb(0xc0, 0x26, 0xd3),

        ButtonPrimary => ResolvedColor::rgb(0x08, 0x91, 0xb2),
        ButtonPrimaryText => ResolvedColor::rgb(0xff, 0xff, 0xff),
        ButtonGhost => ResolvedColor::rgb(0xee, 0xf2, 0xf9),
        ButtonGhostBorder => ResolvedColor::rgb(0xcb, 0xd5, 0xe1),

        CardSurface => ResolvedColor::rgb(0xff, 0xff, 0xff),
        CardBorder => ResolvedColor::rgb(0xdb, 0xe2, 0xef),
        CardGlow => ResolvedColor::rgba(0x0e, 0xa5, 0xe9, 45),
        CardMedia => ResolvedColor::rgb(0xe8, 0xed, 0xf7),

        TileCyan => ResolvedColor::rgb(0xcf, 0xfa, 0xfe),
        TileIndigo => ResolvedColor::rgb(0xe0, 0xe7, 0xff),
        TileFuchsia => ResolvedColor::rgb(0xfa, 0xe8, 0xff),
        TileSky => ResolvedColor::rgb(0xe0, 0xf2, 0xfe),
        TileViolet => ResolvedColor::rgb(0xed, 0xe9, 0xfe),
        TilePurple => ResolvedColor::rgb(0xf3, 0xe8, 0xff),

        SceneBackdrop => ResolvedColor::rgb(0xee, 0xf2, 0xfb),
        SceneWire => ResolvedColor::rgb(0x0e, 0xa5, 0xe9),

        FormField => ResolvedColor::rgb(0xf8, 0xfa, 0xfc),
        FormFieldBorder => ResolvedColor::rgb(0xd7, 0xdf, 0xeb),

        HoverHighlight => ResolvedColor::rgba(0x0e, 0xa5, 0xe9, 26),
        FooterText => ResolvedColor::rgb(0x94, 0xa3, 0xb8),
    }
}
