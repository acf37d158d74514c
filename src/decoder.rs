//! IconVG decoder implementation.
//!
//! Decoding runs in two phases. The metadata phase checks the magic bytes
//! and parses the metadata chunks into a [`Metadata`]. The drawing phase is a
//! two-mode state machine: styling opcodes start paths, drawing opcodes emit
//! path segments, and closing a path returns to styling. Each decoded
//! instruction is delivered to the optional [`Destination`] once all of its
//! operands are known.

use std::fmt;

use crate::buffer::Buffer;
use crate::destination::Destination;
use crate::error::{IconvgError, IconvgResult, UnimplementedFeature};
use crate::opcode::{DrawingOp, Mode, Operands, SegmentFamily, SegmentKind, SingleOp, StylingOp};
use crate::trace::Tracer;
use crate::types::*;
use tracing::{debug, info, trace};

/// Optional parameters for decoding.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// A palette to use instead of the default one.
    pub palette: Option<Palette>,
}

impl DecodeOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the palette override.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}

/// Decoder for IconVG binary data.
///
/// Both the destination and the tracer are optional. Without a destination
/// the whole graphic is still decoded and validated.
///
/// # Example
///
/// ```ignore
/// use iconvg::{Decoder, SvgDestination};
///
/// let data = std::fs::read("icon.ivg")?;
/// let mut svg = SvgDestination::new();
/// Decoder::new(&data).destination(&mut svg).decode()?;
/// std::fs::write("icon.svg", svg.finish())?;
/// ```
pub struct Decoder<'a> {
    /// The bytes not decoded yet.
    src: Buffer<'a>,
    /// Receiver of drawing directives.
    dst: Option<&'a mut dyn Destination>,
    /// Receiver of per-token trace output.
    tracer: Option<&'a mut dyn Tracer>,
    options: DecodeOptions,
}

impl<'a> Decoder<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src: Buffer::new(src),
            dst: None,
            tracer: None,
            options: DecodeOptions::default(),
        }
    }

    /// Sets the destination that receives the decoded directives.
    pub fn destination(mut self, dst: &'a mut dyn Destination) -> Self {
        self.dst = Some(dst);
        self
    }

    /// Sets the tracer that sees every decoded token.
    pub fn tracer(mut self, tracer: &'a mut dyn Tracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Decodes only the metadata, ignoring any opcodes that follow it.
    ///
    /// The destination, if any, is not called.
    ///
    /// # Errors
    ///
    /// Returns an error if the magic bytes or any metadata chunk is malformed.
    pub fn decode_metadata(mut self) -> IconvgResult<Metadata> {
        self.decode_header()
    }

    /// Decodes the whole graphic, driving the destination.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Directives decoded before the
    /// error have already been delivered to the destination.
    pub fn decode(mut self) -> IconvgResult<()> {
        let metadata = self.decode_header()?;
        if let Some(dst) = self.dst.as_deref_mut() {
            dst.reset(&metadata);
        }

        debug!("--- Drawing ---");
        let mut mode = Mode::Styling;
        while let Some(opcode) = self.src.first() {
            mode = match mode {
                Mode::Styling => self.decode_styling(opcode)?,
                Mode::Drawing => self.decode_drawing(opcode)?,
            };
        }

        debug!("Finished in {:?} mode", mode);
        Ok(())
    }

    fn decode_header(&mut self) -> IconvgResult<Metadata> {
        debug!("--- Metadata ---");

        if !self.src.starts_with(&MAGIC) {
            return Err(IconvgError::InvalidMagicIdentifier);
        }
        self.consume(MAGIC.len(), format_args!("Magic identifier"));

        let (num_chunks, n) = self.src.decode_natural();
        if n == 0 {
            return Err(IconvgError::InvalidNumberOfMetadataChunks);
        }
        self.consume(n, format_args!("Number of metadata chunks: {}", num_chunks));
        info!("Number of metadata chunks: {}", num_chunks);

        let mut metadata = Metadata::default();
        if let Some(palette) = self.options.palette {
            debug!("Using caller-supplied palette");
            metadata.palette = palette;
        }

        for _ in 0..num_chunks {
            self.decode_metadata_chunk(&mut metadata)?;
        }

        Ok(metadata)
    }

    fn decode_metadata_chunk(&mut self, metadata: &mut Metadata) -> IconvgResult<()> {
        let (length, n) = self.src.decode_natural();
        if n == 0 {
            return Err(IconvgError::InvalidMetadataChunkLength);
        }
        self.consume(n, format_args!("Metadata chunk length: {}", length));

        // Signed: a length larger than the input can never be satisfied.
        let remaining_want = self.src.len() as i64 - i64::from(length);

        let (mid, n) = self.src.decode_natural();
        if n == 0 {
            return Err(IconvgError::InvalidMetadataIdentifier);
        }
        let id = MetadataId::from_u32(mid).ok_or(IconvgError::UnsupportedMetadataIdentifier)?;
        self.consume(
            n,
            format_args!("Metadata Identifier: {} ({})", mid, id.description()),
        );
        debug!("Metadata chunk {:?}, {} bytes", id, length);

        match id {
            MetadataId::ViewBox => {
                metadata.view_box = self.decode_view_box()?;
            }
            MetadataId::SuggestedPalette => {
                return Err(IconvgError::Unimplemented(
                    UnimplementedFeature::SuggestedPalette,
                ));
            }
        }

        if self.src.len() as i64 != remaining_want {
            return Err(IconvgError::InconsistentMetadataChunkLength);
        }
        Ok(())
    }

    fn decode_view_box(&mut self) -> IconvgResult<ViewBox> {
        let mut bounds = [0.0f32; 4];
        self.decode_coordinates(&mut bounds)
            .map_err(|_| IconvgError::InvalidViewBox)?;

        let [min_x, min_y, max_x, max_y] = bounds;
        let view_box = ViewBox::new(min_x, min_y, max_x, max_y);
        if !view_box.is_valid() {
            return Err(IconvgError::InvalidViewBox);
        }

        info!(
            "View box: ({}, {}) - ({}, {})",
            min_x, min_y, max_x, max_y
        );
        Ok(view_box)
    }

    fn decode_styling(&mut self, opcode: u8) -> IconvgResult<Mode> {
        let op = StylingOp::from_opcode(opcode).ok_or(IconvgError::UnsupportedStylingOpcode)?;
        trace!("Styling opcode {:#04x}: {:?}", opcode, op);

        match op {
            StylingOp::StartPath { adj } => {
                self.consume(
                    1,
                    format_args!(
                        "Start path, filled with CREG[CSEL-{}]; M (absolute moveTo)",
                        adj
                    ),
                );

                let mut coords = [0.0f32; 2];
                self.decode_coordinates(&mut coords)?;

                if let Some(dst) = self.dst.as_deref_mut() {
                    dst.start_path(adj, coords[0], coords[1]);
                }
            }
        }

        Ok(op.next_mode())
    }

    fn decode_drawing(&mut self, opcode: u8) -> IconvgResult<Mode> {
        let op = DrawingOp::from_opcode(opcode).ok_or(IconvgError::UnsupportedDrawingOpcode)?;
        trace!("Drawing opcode {:#04x}: {:?}", opcode, op);

        match op {
            DrawingOp::Segment {
                family,
                repetitions,
            } => {
                self.consume(
                    1,
                    format_args!("{}, {} reps", family.mnemonic, repetitions),
                );

                for i in 0..repetitions {
                    if i != 0 {
                        self.trace(&[], format_args!("{}, implicit", family.mnemonic));
                    }
                    self.decode_segment(family)?;
                }
            }
            DrawingOp::Single(single) => {
                self.consume(1, format_args!("{}", single.description()));
                self.decode_single(single)?;
            }
        }

        Ok(op.next_mode())
    }

    /// Decodes one repetition of a segment instruction and delivers it.
    fn decode_segment(&mut self, family: &SegmentFamily) -> IconvgResult<()> {
        let mut coords = [0.0f32; 6];
        let mut large_arc = false;
        let mut sweep = false;

        match family.operands {
            Operands::Coords(n) => self.decode_coordinates(&mut coords[..n])?,
            Operands::Arc => {
                self.decode_coordinates(&mut coords[..3])?;
                (large_arc, sweep) = self.decode_arc_flags()?;
                self.decode_coordinates(&mut coords[4..6])?;
            }
        }

        let Some(dst) = self.dst.as_deref_mut() else {
            return Ok(());
        };

        let [a, b, c, d, e, f] = coords;
        match family.kind {
            SegmentKind::AbsLineTo => dst.abs_line_to(a, b),
            SegmentKind::RelLineTo => dst.rel_line_to(a, b),
            SegmentKind::AbsSmoothQuadTo => dst.abs_smooth_quad_to(a, b),
            SegmentKind::RelSmoothQuadTo => dst.rel_smooth_quad_to(a, b),
            SegmentKind::AbsQuadTo => dst.abs_quad_to(a, b, c, d),
            SegmentKind::RelQuadTo => dst.rel_quad_to(a, b, c, d),
            SegmentKind::AbsSmoothCubeTo => dst.abs_smooth_cube_to(a, b, c, d),
            SegmentKind::RelSmoothCubeTo => dst.rel_smooth_cube_to(a, b, c, d),
            SegmentKind::AbsCubeTo => dst.abs_cube_to(a, b, c, d, e, f),
            SegmentKind::RelCubeTo => dst.rel_cube_to(a, b, c, d, e, f),
            SegmentKind::AbsArcTo => dst.abs_arc_to(a, b, c, large_arc, sweep, e, f),
            SegmentKind::RelArcTo => dst.rel_arc_to(a, b, c, large_arc, sweep, e, f),
        }

        Ok(())
    }

    fn decode_single(&mut self, op: SingleOp) -> IconvgResult<()> {
        let mut coords = [0.0f32; 2];
        self.decode_coordinates(&mut coords[..op.coordinate_count()])?;

        let Some(dst) = self.dst.as_deref_mut() else {
            return Ok(());
        };

        let [x, y] = coords;
        match op {
            SingleOp::ClosePathEndPath => dst.close_path_end_path(),
            SingleOp::ClosePathAbsMoveTo => dst.close_path_abs_move_to(x, y),
            SingleOp::ClosePathRelMoveTo => dst.close_path_rel_move_to(x, y),
            SingleOp::AbsHLineTo => dst.abs_h_line_to(x),
            SingleOp::RelHLineTo => dst.rel_h_line_to(x),
            SingleOp::AbsVLineTo => dst.abs_v_line_to(x),
            SingleOp::RelVLineTo => dst.rel_v_line_to(x),
        }

        Ok(())
    }

    /// Decodes `out.len()` coordinates in order.
    fn decode_coordinates(&mut self, out: &mut [f32]) -> IconvgResult<()> {
        for value in out.iter_mut() {
            let (x, n) = self.src.decode_coordinate();
            if n == 0 {
                return Err(IconvgError::InvalidNumber);
            }
            self.consume(n, format_args!("    {:+}", x));
            *value = x;
        }
        Ok(())
    }

    /// Decodes the arc flags natural: bit 0 is large-arc, bit 1 is sweep.
    fn decode_arc_flags(&mut self) -> IconvgResult<(bool, bool)> {
        let (x, n) = self.src.decode_natural();
        if n == 0 {
            return Err(IconvgError::InvalidNumber);
        }
        let large_arc = x & 0x01 != 0;
        let sweep = x & 0x02 != 0;
        self.consume(
            n,
            format_args!(
                "    {:#x} (largeArc={}, sweep={})",
                x,
                u8::from(large_arc),
                u8::from(sweep)
            ),
        );
        Ok((large_arc, sweep))
    }

    /// Traces the next `n` bytes as one token and consumes them.
    fn consume(&mut self, n: usize, description: fmt::Arguments<'_>) {
        let bytes = self.src.head(n);
        self.trace(bytes, description);
        self.src = self.src.advance(n);
    }

    fn trace(&mut self, bytes: &[u8], description: fmt::Arguments<'_>) {
        if let Some(tracer) = self.tracer.as_deref_mut() {
            tracer.trace(bytes, description);
        }
    }
}

/// Decodes only the metadata of an IconVG graphic.
///
/// # Errors
///
/// Returns an error if the magic bytes or any metadata chunk is malformed.
pub fn decode_metadata(src: &[u8]) -> IconvgResult<Metadata> {
    Decoder::new(src).decode_metadata()
}

/// Decodes an IconVG graphic, driving `dst` if one is given.
///
/// # Errors
///
/// Returns the first error encountered in the encoded form.
pub fn decode(
    dst: Option<&mut dyn Destination>,
    src: &[u8],
    options: &DecodeOptions,
) -> IconvgResult<()> {
    let decoder = Decoder::new(src).options(options.clone());
    match dst {
        Some(dst) => decoder.destination(dst).decode(),
        None => decoder.decode(),
    }
}
