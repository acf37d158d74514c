//! IconVG value types and their defaults.
//!
//! These are plain data holders: the decoder fills in a [`Metadata`] while it
//! parses the metadata chunks and hands the result to the destination.

/// The magic bytes every IconVG graphic starts with.
pub const MAGIC: [u8; 4] = [0x89, b'I', b'V', b'G'];

/// Number of entries in a palette.
pub const PALETTE_LEN: usize = 64;

/// The view box used when no view box chunk is present.
pub const DEFAULT_VIEW_BOX: ViewBox = ViewBox {
    min: [-32.0, -32.0],
    max: [32.0, 32.0],
};

/// The palette used when neither the graphic nor the caller provides one.
pub const DEFAULT_PALETTE: Palette = Palette([Color::BLACK; PALETTE_LEN]);

/// Decoded metadata of an IconVG graphic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metadata {
    /// The drawing's coordinate bounds.
    pub view_box: ViewBox,
    /// The colors that start-path opcodes select from.
    pub palette: Palette,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            view_box: DEFAULT_VIEW_BOX,
            palette: DEFAULT_PALETTE,
        }
    }
}

/// An axis-aligned rectangle in graphic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Top-left corner (x, y).
    pub min: [f32; 2],
    /// Bottom-right corner (x, y).
    pub max: [f32; 2],
}

impl ViewBox {
    /// Creates a view box from its four bounds.
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: [min_x, min_y],
            max: [max_x, max_y],
        }
    }

    /// Returns true if every bound is finite and `min <= max` on both axes.
    pub fn is_valid(&self) -> bool {
        let finite = self.min.iter().chain(&self.max).all(|v| v.is_finite());
        finite && self.min[0] <= self.max[0] && self.min[1] <= self.max[1]
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        DEFAULT_VIEW_BOX
    }
}

/// A fixed table of 64 colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(pub [Color; PALETTE_LEN]);

impl Palette {
    /// Returns the color at `index`, wrapping modulo the palette size.
    pub fn get(&self, index: usize) -> Color {
        self.0[index % PALETTE_LEN]
    }
}

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

/// A non-premultiplied RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a new color with the given RGBA values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Color = Color::rgba(0, 0, 0, 0xff);
    /// Opaque white.
    pub const WHITE: Color = Color::rgba(0xff, 0xff, 0xff, 0xff);
}

/// Identifiers of the metadata chunk kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataId {
    /// The view box chunk.
    ViewBox,
    /// The suggested palette chunk.
    SuggestedPalette,
}

impl MetadataId {
    /// Maps a decoded identifier to a known chunk kind.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(MetadataId::ViewBox),
            1 => Some(MetadataId::SuggestedPalette),
            _ => None,
        }
    }

    /// Human-readable chunk name used in traces.
    pub fn description(&self) -> &'static str {
        match self {
            MetadataId::ViewBox => "viewBox",
            MetadataId::SuggestedPalette => "suggested palette",
        }
    }
}
