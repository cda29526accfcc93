use crate::deflate::Inflater;
use crate::error::InflateError;

/// Decode a ZLIB-wrapped DEFLATE stream (RFC 1950): a 2-byte header,
/// optionally a 4-byte preset-dictionary id, a DEFLATE payload, and a
/// trailing 4-byte Adler-32 (not validated here; PNG never checks it
/// either).
pub fn decode_zlib(data: &[u8]) -> Result<Vec<u8>, InflateError> {
    if data.len() < 2 {
        return Err(InflateError::TruncatedStream);
    }

    let cmf = data[0];
    let flg = data[1];

    let compression_method = cmf & 0x0F;
    if compression_method != 8 {
        return Err(InflateError::UnsupportedCompression(
            "zlib CM field is not 8 (DEFLATE)"
        ));
    }

    let mut offset = 2;

    // PNG forbids a preset dictionary; a tolerant decoder skips it
    // rather than refusing outright.
    if flg & 0x20 != 0 {
        if data.len() < offset + 4 {
            return Err(InflateError::TruncatedStream);
        }
        offset += 4;

        #[cfg(feature = "log")]
        log::warn!("zlib stream carries a preset dictionary id; skipping it");
    }

    let mut inflater = Inflater::new(&data[offset..]);
    inflater.run()
}
