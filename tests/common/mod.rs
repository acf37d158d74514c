//! Shared helpers for the integration tests.

#![allow(dead_code)]

use iconvg::{Destination, Metadata};

/// One recorded destination call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Reset(Metadata),
    StartPath(usize, f32, f32),
    ClosePathEndPath,
    ClosePathAbsMoveTo(f32, f32),
    ClosePathRelMoveTo(f32, f32),
    AbsHLineTo(f32),
    RelHLineTo(f32),
    AbsVLineTo(f32),
    RelVLineTo(f32),
    AbsLineTo(f32, f32),
    RelLineTo(f32, f32),
    AbsSmoothQuadTo(f32, f32),
    RelSmoothQuadTo(f32, f32),
    AbsQuadTo(f32, f32, f32, f32),
    RelQuadTo(f32, f32, f32, f32),
    AbsSmoothCubeTo(f32, f32, f32, f32),
    RelSmoothCubeTo(f32, f32, f32, f32),
    AbsCubeTo(f32, f32, f32, f32, f32, f32),
    RelCubeTo(f32, f32, f32, f32, f32, f32),
    AbsArcTo(f32, f32, f32, bool, bool, f32, f32),
    RelArcTo(f32, f32, f32, bool, bool, f32, f32),
}

/// A destination that records every call it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Destination for Recorder {
    fn reset(&mut self, metadata: &Metadata) {
        self.calls.push(Call::Reset(*metadata));
    }
    fn start_path(&mut self, adj: usize, x: f32, y: f32) {
        self.calls.push(Call::StartPath(adj, x, y));
    }
    fn close_path_end_path(&mut self) {
        self.calls.push(Call::ClosePathEndPath);
    }
    fn close_path_abs_move_to(&mut self, x: f32, y: f32) {
        self.calls.push(Call::ClosePathAbsMoveTo(x, y));
    }
    fn close_path_rel_move_to(&mut self, x: f32, y: f32) {
        self.calls.push(Call::ClosePathRelMoveTo(x, y));
    }
    fn abs_h_line_to(&mut self, x: f32) {
        self.calls.push(Call::AbsHLineTo(x));
    }
    fn rel_h_line_to(&mut self, x: f32) {
        self.calls.push(Call::RelHLineTo(x));
    }
    fn abs_v_line_to(&mut self, y: f32) {
        self.calls.push(Call::AbsVLineTo(y));
    }
    fn rel_v_line_to(&mut self, y: f32) {
        self.calls.push(Call::RelVLineTo(y));
    }
    fn abs_line_to(&mut self, x: f32, y: f32) {
        self.calls.push(Call::AbsLineTo(x, y));
    }
    fn rel_line_to(&mut self, x: f32, y: f32) {
        self.calls.push(Call::RelLineTo(x, y));
    }
    fn abs_smooth_quad_to(&mut self, x: f32, y: f32) {
        self.calls.push(Call::AbsSmoothQuadTo(x, y));
    }
    fn rel_smooth_quad_to(&mut self, x: f32, y: f32) {
        self.calls.push(Call::RelSmoothQuadTo(x, y));
    }
    fn abs_quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.calls.push(Call::AbsQuadTo(x1, y1, x, y));
    }
    fn rel_quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.calls.push(Call::RelQuadTo(x1, y1, x, y));
    }
    fn abs_smooth_cube_to(&mut self, x2: f32, y2: f32, x: f32, y: f32) {
        self.calls.push(Call::AbsSmoothCubeTo(x2, y2, x, y));
    }
    fn rel_smooth_cube_to(&mut self, x2: f32, y2: f32, x: f32, y: f32) {
        self.calls.push(Call::RelSmoothCubeTo(x2, y2, x, y));
    }
    fn abs_cube_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.calls.push(Call::AbsCubeTo(x1, y1, x2, y2, x, y));
    }
    fn rel_cube_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.calls.push(Call::RelCubeTo(x1, y1, x2, y2, x, y));
    }
    fn abs_arc_to(&mut self, rx: f32, ry: f32, rot: f32, large_arc: bool, sweep: bool, x: f32, y: f32) {
        self.calls.push(Call::AbsArcTo(rx, ry, rot, large_arc, sweep, x, y));
    }
    fn rel_arc_to(&mut self, rx: f32, ry: f32, rot: f32, large_arc: bool, sweep: bool, x: f32, y: f32) {
        self.calls.push(Call::RelArcTo(rx, ry, rot, large_arc, sweep, x, y));
    }
}

/// Magic bytes, one view box chunk of (0, 0) - (48, 48).
pub const HEADER: &[u8] = &[
    0x89, 0x49, 0x56, 0x47, // magic
    0x02, // 1 metadata chunk
    0x0a, // chunk length 5
    0x00, // viewBox
    0x80, 0x80, 0xe0, 0xe0, // 0, 0, 48, 48
];

/// Two paths exercising every single-byte drawing opcode family.
pub const SAMPLE_DATA: &[u8] = &[
    0x89, 0x49, 0x56, 0x47, 0x02, 0x0a, 0x00, 0x80, 0x80, 0xe0, 0xe0,
    // Start path CREG[CSEL-0] at (4, 4)
    0xc0, 0x88, 0x88,
    // L x3: (44, 4) (44, 44) (4, 44)
    0x02, 0xd8, 0x88, 0xd8, 0xd8, 0x88, 0xd8,
    // z; end path
    0xe1,
    // Start path CREG[CSEL-2] at (8, 8)
    0xc2, 0x90, 0x90,
    // h 10, v 10, H 8
    0xe7, 0x94, 0xe9, 0x94, 0xe6, 0x90,
    // z; m (1, 1)
    0xe3, 0x82, 0x82,
    // a 2 2 0 large-arc sweep (4, 0)
    0xd0, 0x84, 0x84, 0x80, 0x06, 0x88, 0x80,
    // z; end path
    0xe1,
];

/// Returns HEADER followed by `body`.
pub fn with_header(body: &[u8]) -> Vec<u8> {
    let mut data = HEADER.to_vec();
    data.extend_from_slice(body);
    data
}

/// Decodes `data` into a fresh recorder.
pub fn record(data: &[u8]) -> (iconvg::IconvgResult<()>, Vec<Call>) {
    let mut recorder = Recorder::default();
    let result = iconvg::Decoder::new(data).destination(&mut recorder).decode();
    (result, recorder.calls)
}
