//! Core error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DopplerError {
    #[error("Pixel buffer has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BitmapSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
