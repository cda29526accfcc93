use core::fmt;

use scanline_inflate::InflateError;

/// Everything that can go wrong decoding a PNG: exhaustive, with no
/// local recovery. On any variant here the caller gets no pixels; see
/// [`crate::decoder::PngDecoder::decode`].
///
/// A plain enum with a hand-written `Debug`/`Display` instead of a
/// derived one.
pub enum PngError {
    /// The underlying byte source could not produce the requested bytes.
    Io(String),
    /// The first 8 bytes are not the PNG signature.
    BadSignature,
    /// A chunk header, chunk body, or the bit stream ended prematurely.
    TruncatedStream,
    /// An unknown critical chunk was encountered (e.g. `PLTE`).
    UnsupportedCriticalChunk([u8; 4]),
    /// IHDR options outside the supported subset (bit depth != 8, color
    /// type not in {2, 6}, compression/filter/interlace method != 0).
    Unsupported(&'static str),
    /// A malformed DEFLATE stream: bad block type, LEN/NLEN mismatch,
    /// an out-of-range back-reference, or a broken Huffman code.
    CorruptStream(&'static str)
}

impl fmt::Debug for PngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::BadSignature => write!(f, "not a PNG file: bad signature"),
            Self::TruncatedStream => write!(f, "truncated PNG stream"),
            Self::UnsupportedCriticalChunk(chunk) => {
                let name = std::str::from_utf8(chunk).unwrap_or("????");
                write!(f, "unsupported critical chunk: {name}")
            }
            Self::Unsupported(why) => write!(f, "unsupported PNG: {why}"),
            Self::CorruptStream(why) => write!(f, "corrupt PNG data stream: {why}")
        }
    }
}

impl fmt::Display for PngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for PngError {}

impl From<InflateError> for PngError {
    fn from(value: InflateError) -> Self {
        match value {
            InflateError::TruncatedStream => PngError::TruncatedStream,
            InflateError::UnsupportedCompression(why) => PngError::Unsupported(why),
            InflateError::CorruptStream(why) => PngError::CorruptStream(why)
        }
    }
}

impl From<std::io::Error> for PngError {
    fn from(value: std::io::Error) -> Self {
        PngError::Io(value.to_string())
    }
}
