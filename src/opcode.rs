//! Opcode tables for the two decoding modes.
//!
//! The byte-to-instruction mapping is the wire contract. Segment opcodes
//! (line, curve and arc families) are looked up in [`SEGMENT_FAMILIES`]; the
//! few structural opcodes have single fixed byte values.

/// The interpretation context for the next opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Selecting how a path is painted and started.
    Styling,
    /// Emitting segments of the current path.
    Drawing,
}

impl Mode {
    /// Returns the mode after executing `opcode` in this mode, or `None` if
    /// the opcode is not supported here.
    pub fn next(self, opcode: u8) -> Option<Mode> {
        match self {
            Mode::Styling => StylingOp::from_opcode(opcode).map(|op| op.next_mode()),
            Mode::Drawing => DrawingOp::from_opcode(opcode).map(|op| op.next_mode()),
        }
    }
}

/// Segment instruction kinds that carry an embedded repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    AbsLineTo,
    RelLineTo,
    AbsSmoothQuadTo,
    RelSmoothQuadTo,
    AbsQuadTo,
    RelQuadTo,
    AbsSmoothCubeTo,
    RelSmoothCubeTo,
    AbsCubeTo,
    RelCubeTo,
    AbsArcTo,
    RelArcTo,
}

/// What a single repetition of a segment instruction reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    /// A fixed number of coordinates.
    Coords(usize),
    /// Radii and rotation, a flags natural, then the end point.
    Arc,
}

/// One row of the segment opcode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentFamily {
    pub kind: SegmentKind,
    /// First opcode of the range.
    pub first: u8,
    /// Last opcode of the range, inclusive.
    pub last: u8,
    pub operands: Operands,
    /// Width of the repeat count field in the low bits of the opcode.
    pub repeat_bits: u8,
    /// SVG-style mnemonic used in traces.
    pub mnemonic: &'static str,
}

impl SegmentFamily {
    /// Returns the number of repetitions `opcode` encodes for this family.
    pub fn repetitions(&self, opcode: u8) -> usize {
        let mask = (1u8 << self.repeat_bits) - 1;
        1 + usize::from(opcode & mask)
    }
}

const fn family(
    kind: SegmentKind,
    first: u8,
    last: u8,
    operands: Operands,
    repeat_bits: u8,
    mnemonic: &'static str,
) -> SegmentFamily {
    SegmentFamily {
        kind,
        first,
        last,
        operands,
        repeat_bits,
        mnemonic,
    }
}

/// Drawing opcodes below this value are segment instructions.
pub const SEGMENT_LIMIT: u8 = 0xe0;

/// The segment opcode table, ordered by opcode range.
pub static SEGMENT_FAMILIES: [SegmentFamily; 12] = [
    family(SegmentKind::AbsLineTo, 0x00, 0x1f, Operands::Coords(2), 5, "L (absolute lineTo)"),
    family(SegmentKind::RelLineTo, 0x20, 0x3f, Operands::Coords(2), 5, "l (relative lineTo)"),
    family(SegmentKind::AbsSmoothQuadTo, 0x40, 0x4f, Operands::Coords(2), 4, "T (absolute smooth quadTo)"),
    family(SegmentKind::RelSmoothQuadTo, 0x50, 0x5f, Operands::Coords(2), 4, "t (relative smooth quadTo)"),
    family(SegmentKind::AbsQuadTo, 0x60, 0x6f, Operands::Coords(4), 4, "Q (absolute quadTo)"),
    family(SegmentKind::RelQuadTo, 0x70, 0x7f, Operands::Coords(4), 4, "q (relative quadTo)"),
    family(SegmentKind::AbsSmoothCubeTo, 0x80, 0x8f, Operands::Coords(4), 4, "S (absolute smooth cubeTo)"),
    family(SegmentKind::RelSmoothCubeTo, 0x90, 0x9f, Operands::Coords(4), 4, "s (relative smooth cubeTo)"),
    family(SegmentKind::AbsCubeTo, 0xa0, 0xaf, Operands::Coords(6), 4, "C (absolute cubeTo)"),
    family(SegmentKind::RelCubeTo, 0xb0, 0xbf, Operands::Coords(6), 4, "c (relative cubeTo)"),
    family(SegmentKind::AbsArcTo, 0xc0, 0xcf, Operands::Arc, 4, "A (absolute arcTo)"),
    family(SegmentKind::RelArcTo, 0xd0, 0xdf, Operands::Arc, 4, "a (relative arcTo)"),
];

pub const OP_CLOSE_PATH_END_PATH: u8 = 0xe1;
pub const OP_CLOSE_PATH_ABS_MOVE_TO: u8 = 0xe2;
pub const OP_CLOSE_PATH_REL_MOVE_TO: u8 = 0xe3;
pub const OP_ABS_H_LINE_TO: u8 = 0xe6;
pub const OP_REL_H_LINE_TO: u8 = 0xe7;
pub const OP_ABS_V_LINE_TO: u8 = 0xe8;
pub const OP_REL_V_LINE_TO: u8 = 0xe9;

/// First start-path opcode in styling mode.
pub const OP_START_PATH_FIRST: u8 = 0xc0;
/// Last start-path opcode in styling mode, inclusive.
pub const OP_START_PATH_LAST: u8 = 0xc6;

/// A drawing-mode opcode with a single fixed byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleOp {
    ClosePathEndPath,
    ClosePathAbsMoveTo,
    ClosePathRelMoveTo,
    AbsHLineTo,
    RelHLineTo,
    AbsVLineTo,
    RelVLineTo,
}

impl SingleOp {
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            OP_CLOSE_PATH_END_PATH => Some(SingleOp::ClosePathEndPath),
            OP_CLOSE_PATH_ABS_MOVE_TO => Some(SingleOp::ClosePathAbsMoveTo),
            OP_CLOSE_PATH_REL_MOVE_TO => Some(SingleOp::ClosePathRelMoveTo),
            OP_ABS_H_LINE_TO => Some(SingleOp::AbsHLineTo),
            OP_REL_H_LINE_TO => Some(SingleOp::RelHLineTo),
            OP_ABS_V_LINE_TO => Some(SingleOp::AbsVLineTo),
            OP_REL_V_LINE_TO => Some(SingleOp::RelVLineTo),
            _ => None,
        }
    }

    /// Number of coordinates the instruction reads.
    pub fn coordinate_count(&self) -> usize {
        match self {
            SingleOp::ClosePathEndPath => 0,
            SingleOp::ClosePathAbsMoveTo | SingleOp::ClosePathRelMoveTo => 2,
            SingleOp::AbsHLineTo
            | SingleOp::RelHLineTo
            | SingleOp::AbsVLineTo
            | SingleOp::RelVLineTo => 1,
        }
    }

    /// Human-readable description used in traces.
    pub fn description(&self) -> &'static str {
        match self {
            SingleOp::ClosePathEndPath => "z (closePath); end path",
            SingleOp::ClosePathAbsMoveTo => "z (closePath); M (absolute moveTo)",
            SingleOp::ClosePathRelMoveTo => "z (closePath); m (relative moveTo)",
            SingleOp::AbsHLineTo => "H (absolute horizontal lineTo)",
            SingleOp::RelHLineTo => "h (relative horizontal lineTo)",
            SingleOp::AbsVLineTo => "V (absolute vertical lineTo)",
            SingleOp::RelVLineTo => "v (relative vertical lineTo)",
        }
    }
}

/// A decoded drawing-mode opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingOp {
    /// A line, curve or arc instruction repeated `repetitions` times.
    Segment {
        family: &'static SegmentFamily,
        repetitions: usize,
    },
    Single(SingleOp),
}

impl DrawingOp {
    /// Looks up a drawing-mode opcode. Returns `None` for unassigned bytes.
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        if opcode >= SEGMENT_LIMIT {
            return SingleOp::from_opcode(opcode).map(DrawingOp::Single);
        }
        SEGMENT_FAMILIES
            .iter()
            .find(|f| (f.first..=f.last).contains(&opcode))
            .map(|family| DrawingOp::Segment {
                family,
                repetitions: family.repetitions(opcode),
            })
    }

    /// Only closing and ending a path returns to styling mode.
    pub fn next_mode(&self) -> Mode {
        match self {
            DrawingOp::Single(SingleOp::ClosePathEndPath) => Mode::Styling,
            _ => Mode::Drawing,
        }
    }
}

/// A decoded styling-mode opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylingOp {
    /// Start a path filled with the color register `adj` slots below the
    /// current selector.
    StartPath { adj: usize },
}

impl StylingOp {
    /// Looks up a styling-mode opcode. The low range and `0xc7` are reserved
    /// for styling operations that are not supported.
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            OP_START_PATH_FIRST..=OP_START_PATH_LAST => Some(StylingOp::StartPath {
                adj: usize::from(opcode & 0x07),
            }),
            _ => None,
        }
    }

    pub fn next_mode(&self) -> Mode {
        match self {
            StylingOp::StartPath { .. } => Mode::Drawing,
        }
    }
}
