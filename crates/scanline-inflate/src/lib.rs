//! A small ZLIB/DEFLATE inflater.
//!
//! Scope is deliberately narrow: stored, fixed-Huffman and
//! dynamic-Huffman DEFLATE blocks, decoded into a single growable output
//! buffer that also serves as the LZ77 window. No streaming, no
//! encoding; this crate only goes one way.

mod bitstream;
mod deflate;
mod error;
mod huffman;
mod tables;
mod zlib;

pub use deflate::Inflater;
pub use error::InflateError;
pub use zlib::decode_zlib;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_zlib_rejects_non_deflate_cm() {
        // CMF with CM=15 (reserved), FLG arbitrary.
        let data = [0x8F, 0x01];
        assert!(decode_zlib(&data).is_err());
    }
}
