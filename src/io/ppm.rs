//! Plain-file PPM sink
//!
//! Binary (P6) and ASCII (P3) writers for generated fields. PPM has no
//! alpha channel; the buffer's constant 255 alpha is dropped and the
//! replicated gray triplet is written as-is.
//!
//! Author: Moroya Sakamoto

use super::{ImageSink, SinkError};
use crate::types::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write a buffer as binary PPM (P6).
pub fn export_ppm(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), SinkError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    write!(w, "P6\n{} {}\n255\n", buffer.width, buffer.height)?;
    for px in buffer.data.chunks_exact(4) {
        w.write_all(&px[..3])?;
    }
    w.flush()?;
    Ok(())
}

/// Write a buffer as ASCII PPM (P3), one pixel per line.
pub fn export_ppm_ascii(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), SinkError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "P3")?;
    writeln!(w, "{} {}", buffer.width, buffer.height)?;
    writeln!(w, "255")?;
    for px in buffer.data.chunks_exact(4) {
        writeln!(w, "{} {} {}", px[0], px[1], px[2])?;
    }
    w.flush()?;
    Ok(())
}

/// File-backed sink writing binary PPM.
pub struct PpmFileSink {
    /// Destination path.
    pub path: PathBuf,
}

impl PpmFileSink {
    /// Create a sink targeting `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSink for PpmFileSink {
    fn consume(&mut self, buffer: &PixelBuffer) -> Result<(), SinkError> {
        export_ppm(buffer, &self.path)
    }
}
