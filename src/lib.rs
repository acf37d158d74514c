//! # IconVG - Compact Binary Vector Graphics Decoder
//!
//! A library for decoding IconVG graphics.
//!
//! IconVG is a compact binary format for vector icons: a metadata section
//! (view box, suggested palette) followed by a path-drawing program encoded
//! as a dense opcode stream. The decoder drives a caller-supplied
//! [`Destination`] with one call per decoded instruction.
//!
//! ## Example
//!
//! ```rust,ignore
//! use iconvg::{Decoder, SvgDestination};
//!
//! let data = std::fs::read("icon.ivg")?;
//! let metadata = iconvg::decode_metadata(&data)?;
//!
//! let mut svg = SvgDestination::new();
//! Decoder::new(&data).destination(&mut svg).decode()?;
//! let document = svg.finish();
//! ```

pub mod buffer;
pub mod decoder;
pub mod destination;
pub mod error;
pub mod opcode;
pub mod svg;
pub mod trace;
pub mod types;

// Re-export main types for convenient access
pub use buffer::Buffer;
pub use decoder::{decode, decode_metadata, DecodeOptions, Decoder};
pub use destination::Destination;
pub use error::{IconvgError, IconvgResult, UnimplementedFeature};
pub use svg::{SvgConfig, SvgDestination};
pub use trace::{disassemble, disassemble_partial, Disassembler, LogTracer, Tracer};
pub use types::*;
