use core::fmt;

/// Error taxonomy for `scanline-bmp`, in the same hand-written style as
/// `scanline_png::error::PngError`.
pub enum BmpError {
    /// The underlying file could not be opened, read, or written.
    Io(String),
    /// Fewer bytes were read than the file header promises.
    TruncatedStream,
    /// The first two bytes are not `BM`.
    BadMagic,
    /// Bits-per-pixel other than 24 (the only format this crate writes
    /// or reads).
    UnsupportedPixelFormat(u16),
    /// Compression method other than 0 (uncompressed).
    UnsupportedCompression(u32)
}

impl fmt::Debug for BmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::TruncatedStream => write!(f, "truncated BMP file"),
            Self::BadMagic => write!(f, "not a BMP file: missing 'BM' magic"),
            Self::UnsupportedPixelFormat(bits) => {
                write!(f, "unsupported bits-per-pixel: {bits} (only 24 is supported)")
            }
            Self::UnsupportedCompression(method) => {
                write!(f, "unsupported BMP compression method: {method}")
            }
        }
    }
}

impl fmt::Display for BmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for BmpError {}

impl From<std::io::Error> for BmpError {
    fn from(value: std::io::Error) -> Self {
        BmpError::Io(value.to_string())
    }
}
