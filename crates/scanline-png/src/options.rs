/// Decoder-wide knobs: a small `Default`-able struct passed by value
/// into [`crate::decoder::PngDecoder::new_with_options`].
///
/// Memory usage is `O(compressed size + H*(1+W*bpp) + H*W*bpp)` and
/// otherwise uncapped by this crate; `max_width` and `max_height` let a
/// host wrapper impose a byte budget before the decoder allocates
/// anything pixel-sized.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    pub max_width: u32,
    pub max_height: u32
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions { max_width: 1 << 24, max_height: 1 << 24 }
    }
}
