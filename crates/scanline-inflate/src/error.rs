use core::fmt;

/// Everything that can go wrong while inflating a ZLIB/DEFLATE stream.
///
/// This is an exhaustive taxonomy, not a catch-all: every variant maps to
/// exactly one failure mode described by RFC 1950/1951, plus the bounds
/// checks a safe Rust bit-reader needs that a C implementation gets for
/// free (or doesn't check at all).
pub enum InflateError {
    /// Reading past the end of the compressed buffer.
    TruncatedStream,
    /// `CMF & 0x0F != 8`, or a preset dictionary was present.
    UnsupportedCompression(&'static str),
    /// BTYPE==3, LEN/NLEN mismatch, a back-reference before the start of
    /// the output, or a code-length sequence that overran its count.
    CorruptStream(&'static str)
}

impl fmt::Debug for InflateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedStream => write!(f, "truncated stream: ran out of input bits"),
            Self::UnsupportedCompression(v) => write!(f, "unsupported compression: {v}"),
            Self::CorruptStream(v) => write!(f, "corrupt deflate stream: {v}")
        }
    }
}

impl fmt::Display for InflateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for InflateError {}
