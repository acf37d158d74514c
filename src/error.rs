//! Error types for the IconVG decoder.
//!
//! Every malformed or unsupported input maps to exactly one variant here.
//! None of them is recoverable: the first error aborts the decode and is
//! handed back to the caller as is.

use std::fmt;
use thiserror::Error;

pub type IconvgResult<T> = Result<T, IconvgError>;

/// Errors that can occur while decoding an IconVG graphic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconvgError {
    /// The input does not start with the IconVG magic bytes.
    #[error("invalid magic identifier")]
    InvalidMagicIdentifier,

    /// The metadata chunk count is not a well-formed natural number.
    #[error("invalid number of metadata chunks")]
    InvalidNumberOfMetadataChunks,

    /// A metadata chunk length is not a well-formed natural number.
    #[error("invalid metadata chunk length")]
    InvalidMetadataChunkLength,

    /// A metadata identifier is not a well-formed natural number.
    #[error("invalid metadata identifier")]
    InvalidMetadataIdentifier,

    /// A metadata identifier is well-formed but unknown.
    #[error("unsupported metadata identifier")]
    UnsupportedMetadataIdentifier,

    /// The view box is truncated, inverted, or not finite.
    #[error("invalid view box")]
    InvalidViewBox,

    /// A metadata chunk payload did not consume exactly its declared length.
    #[error("inconsistent metadata chunk length")]
    InconsistentMetadataChunkLength,

    /// An operand is truncated or otherwise malformed.
    #[error("invalid number")]
    InvalidNumber,

    /// The opcode has no meaning in styling mode.
    #[error("unsupported styling opcode")]
    UnsupportedStylingOpcode,

    /// The opcode has no meaning in drawing mode.
    #[error("unsupported drawing opcode")]
    UnsupportedDrawingOpcode,

    /// A recognized part of the format that this decoder does not handle yet.
    #[error("not yet implemented: {0}")]
    Unimplemented(UnimplementedFeature),
}

/// Parts of the format that are recognized but not decoded yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnimplementedFeature {
    /// The suggested palette metadata chunk.
    SuggestedPalette,
}

impl fmt::Display for UnimplementedFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            UnimplementedFeature::SuggestedPalette => "suggested palette metadata chunk",
        };
        write!(f, "{}", description)
    }
}
