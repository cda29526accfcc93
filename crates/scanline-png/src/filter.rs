use crate::enums::ScanlineFilter;
use crate::error::PngError;

/// Reverse the per-scanline prediction filter, turning `H` scanlines of
/// `(1 filter byte + W*bpp data bytes)` into a tightly packed pixel
/// buffer of exactly `H * W * bpp` bytes.
///
/// Implements RFC 2083 section 6: the `a`/`b`/`c` neighbor lookups and
/// the five filter formulas.
pub fn defilter(inflated: &[u8], width: usize, height: usize, bpp: usize) -> Result<Vec<u8>, PngError> {
    let row_stride = width * bpp;
    let scanline_stride = 1 + row_stride;

    if inflated.len() < height * scanline_stride {
        return Err(PngError::TruncatedStream);
    }

    let mut pixels = vec![0u8; height * row_stride];

    for y in 0..height {
        let scanline_start = y * scanline_stride;
        let filter_byte = inflated[scanline_start];
        let filter = ScanlineFilter::from_u8(filter_byte)
            .ok_or(PngError::CorruptStream("unknown scanline filter type"))?;

        let src = &inflated[scanline_start + 1..scanline_start + 1 + row_stride];
        let out_row_start = y * row_stride;

        for i in 0..row_stride {
            let x = src[i];

            let a = if i >= bpp { pixels[out_row_start + i - bpp] } else { 0 };
            let b = if y > 0 { pixels[out_row_start - row_stride + i] } else { 0 };
            let c =
                if y > 0 && i >= bpp { pixels[out_row_start - row_stride + i - bpp] } else { 0 };

            let value = match filter {
                ScanlineFilter::None => x,
                ScanlineFilter::Sub => x.wrapping_add(a),
                ScanlineFilter::Up => x.wrapping_add(b),
                ScanlineFilter::Average => {
                    let avg = (u16::from(a) + u16::from(b)) / 2;
                    x.wrapping_add(avg as u8)
                }
                ScanlineFilter::Paeth => x.wrapping_add(paeth_predictor(a, b, c))
            };

            pixels[out_row_start + i] = value;
        }
    }

    Ok(pixels)
}

/// Select whichever of `a`, `b`, `c` is closest to the linear estimate
/// `a + b - c`, per RFC 2083 §6.6. Arithmetic happens in `i32` since the
/// intermediate `a + b - c` can go negative.
fn paeth_predictor(a: u8, b: u8, c: u8) -> u8 {
    let (a, b, c) = (i32::from(a), i32::from(b), i32::from(c));

    let p = a + b - c;
    let pa = (p - a).abs();
    let pb = (p - b).abs();
    let pc = (p - c).abs();

    let predicted = if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    };

    predicted as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paeth_all_zero_yields_zero() {
        assert_eq!(paeth_predictor(0, 0, 0), 0);
    }

    #[test]
    fn none_filter_is_identity() {
        // 1x1 RGB, filter None, pixel (0xFF, 0x00, 0x00).
        let inflated = [0x00, 0xFF, 0x00, 0x00];
        let pixels = defilter(&inflated, 1, 1, 3).unwrap();
        assert_eq!(pixels, vec![0xFF, 0x00, 0x00]);
    }

    #[test]
    fn sub_filter_checker() {
        // 2x2 RGB: row 0 is filter None (black, white), row 1 is filter
        // Sub (white, then +FF+FF+FF wrapping to FE FE FE).
        let mut inflated = Vec::new();
        inflated.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF]);
        inflated.extend_from_slice(&[0x01, 0xFF, 0xFF, 0xFF, 0x01, 0x01, 0x01]);

        let pixels = defilter(&inflated, 2, 2, 3).unwrap();
        assert_eq!(
            pixels,
            vec![0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFE, 0xFE]
        );
    }

    #[test]
    fn up_filter_rgba() {
        // 1x2 RGBA: row 0 filter None, row 1 filter Up adding (1,2,3,4).
        let mut inflated = Vec::new();
        inflated.extend_from_slice(&[0x00, 0x10, 0x20, 0x30, 0x40]);
        inflated.extend_from_slice(&[0x02, 0x01, 0x02, 0x03, 0x04]);

        let pixels = defilter(&inflated, 1, 2, 4).unwrap();
        assert_eq!(pixels, vec![0x10, 0x20, 0x30, 0x40, 0x11, 0x22, 0x33, 0x44]);
    }
}
