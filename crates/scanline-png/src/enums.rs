/// The subset of PNG chunk types this decoder dispatches on by name.
/// Anything else falls through to the critical/ancillary skip logic in
/// [`crate::decoder::PngDecoder::decode`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum PngChunkType {
    IHDR,
    IDAT,
    IEND,
    Unknown
}

impl PngChunkType {
    pub(crate) fn from_bytes(bytes: &[u8; 4]) -> Self {
        match bytes {
            b"IHDR" => PngChunkType::IHDR,
            b"IDAT" => PngChunkType::IDAT,
            b"IEND" => PngChunkType::IEND,
            _ => PngChunkType::Unknown
        }
    }
}

/// IHDR color type, restricted to the two this decoder supports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PngColor {
    #[default]
    Rgb,
    Rgba
}

impl PngColor {
    pub(crate) fn from_u8(value: u8) -> Option<Self> {
        match value {
            2 => Some(PngColor::Rgb),
            6 => Some(PngColor::Rgba),
            _ => None
        }
    }

    /// Bytes per pixel for this color type at the one bit depth this
    /// decoder supports (8).
    pub fn bytes_per_pixel(self) -> u8 {
        match self {
            PngColor::Rgb => 3,
            PngColor::Rgba => 4
        }
    }
}

/// Per-scanline filter byte (RFC 2083 §6.2), distinct from
/// [`FilterMethod`] (the whole-image IHDR field, which PNG defines only
/// one value of).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ScanlineFilter {
    None,
    Sub,
    Up,
    Average,
    Paeth
}

impl ScanlineFilter {
    pub(crate) fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ScanlineFilter::None),
            1 => Some(ScanlineFilter::Sub),
            2 => Some(ScanlineFilter::Up),
            3 => Some(ScanlineFilter::Average),
            4 => Some(ScanlineFilter::Paeth),
            _ => None
        }
    }
}

/// IHDR filter method. PNG only defines value 0 ("adaptive filtering").
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FilterMethod {
    #[default]
    Adaptive
}

/// IHDR interlace method. Only `Standard` (no interlacing) is supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum InterlaceMethod {
    #[default]
    Standard
}
