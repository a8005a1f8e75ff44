//! Image sinks: where finished pixel buffers go
//!
//! The generator hands a completed [`PixelBuffer`] to a sink and keeps
//! no reference afterwards. Sinks know nothing about the noise math and
//! the generator knows nothing about storage, naming or cataloging —
//! that whole concern lives on this side of the boundary.
//!
//! Author: Moroya Sakamoto

mod ppm;

pub use ppm::{export_ppm, export_ppm_ascii, PpmFileSink};

use crate::types::PixelBuffer;
use thiserror::Error;

/// Errors surfaced by image sinks.
#[derive(Error, Debug)]
pub enum SinkError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Consumer of finished pixel buffers.
///
/// Implementations persist or forward the buffer; the generator only
/// ever calls [`consume`](ImageSink::consume) once per generated field.
pub trait ImageSink {
    /// Persist or forward one finished buffer.
    fn consume(&mut self, buffer: &PixelBuffer) -> Result<(), SinkError>;
}
