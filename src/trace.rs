//! Per-token tracing of the decoder.
//!
//! A [`Tracer`] sees every successfully decoded span of the input (magic
//! bytes, metadata fields, opcodes, operands) together with a short
//! description. [`Disassembler`] renders those into a text listing.

use std::fmt;

use crate::decoder::Decoder;
use crate::error::IconvgResult;

/// Receives one call per decoded token.
///
/// `bytes` is the exact span the token occupied. It is empty for the
/// implicit repetitions of a repeated drawing instruction, which share the
/// opcode byte of the first repetition.
pub trait Tracer {
    fn trace(&mut self, bytes: &[u8], description: fmt::Arguments<'_>);
}

impl<F> Tracer for F
where
    F: FnMut(&[u8], fmt::Arguments<'_>),
{
    fn trace(&mut self, bytes: &[u8], description: fmt::Arguments<'_>) {
        self(bytes, description)
    }
}

/// Width of the hex column in a disassembly listing.
const HEX_COLUMN_WIDTH: usize = 14;

/// A tracer that writes a disassembly listing.
///
/// Each line holds the token's bytes as lowercase hex pairs, padded to a
/// fixed column, followed by the token's description.
#[derive(Debug, Default)]
pub struct Disassembler {
    output: String,
}

impl Disassembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the listing written so far.
    pub fn finish(self) -> String {
        self.output
    }
}

impl Tracer for Disassembler {
    fn trace(&mut self, bytes: &[u8], description: fmt::Arguments<'_>) {
        let mut column = String::with_capacity(HEX_COLUMN_WIDTH);
        for b in bytes {
            column.push_str(&format!("{:02x} ", b));
        }
        self.output.push_str(&format!(
            "{:<width$}{}\n",
            column,
            description,
            width = HEX_COLUMN_WIDTH
        ));
    }
}

/// A tracer that forwards every token to `tracing` at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&mut self, bytes: &[u8], description: fmt::Arguments<'_>) {
        tracing::trace!(bytes = ?bytes, "{}", description);
    }
}

/// Decodes `src` without a destination and returns its disassembly listing.
///
/// # Errors
///
/// Returns the first decoding error. Use [`disassemble_partial`] to keep the
/// listing of the tokens decoded before it.
pub fn disassemble(src: &[u8]) -> IconvgResult<String> {
    let (listing, result) = disassemble_partial(src);
    result.map(|()| listing)
}

/// Disassembles as far as `src` decodes.
///
/// The listing always covers every token up to the first error, which is
/// returned alongside it.
pub fn disassemble_partial(src: &[u8]) -> (String, IconvgResult<()>) {
    let mut disassembler = Disassembler::new();
    let result = Decoder::new(src).tracer(&mut disassembler).decode();
    (disassembler.finish(), result)
}
