use zune_core::bytestream::ZByteReader;

use crate::constants::{IHDR_BODY_LEN, PNG_SIGNATURE};
use crate::enums::{FilterMethod, InterlaceMethod, PngChunkType, PngColor};
use crate::error::PngError;
use crate::filter::defilter;
use crate::options::DecoderOptions;

#[derive(Copy, Clone)]
struct PngChunk {
    length: usize,
    chunk: [u8; 4],
    chunk_type: PngChunkType
}

/// Metadata carried by IHDR, kept as independent fields throughout (the
/// source conflated bit depth and bytes-per-pixel in one field; see
/// `DESIGN.md`).
#[derive(Debug, Default)]
pub struct PngInfo {
    pub width: u32,
    pub height: u32,
    pub depth: u8,
    pub color: Option<PngColor>,
    pub filter_method: FilterMethod,
    pub interlace_method: InterlaceMethod
}

impl PngInfo {
    pub fn bytes_per_pixel(&self) -> u8 {
        self.color.map(PngColor::bytes_per_pixel).unwrap_or(0)
    }
}

/// The fully decoded image: width, height, channel count and a
/// row-major, top-to-bottom pixel buffer packed RGB or RGBA per pixel.
/// This is the interface a downstream consumer (a BMP writer or
/// similar sink) reads the decoded pixels through.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub pixels: Vec<u8>
}

pub struct PngDecoder<'a> {
    seen_hdr: bool,
    seen_iend: bool,
    idat_count: usize,
    stream: ZByteReader<'a>,
    options: DecoderOptions,
    info: PngInfo,
    idat: Vec<u8>
}

impl<'a> PngDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::new_with_options(data, DecoderOptions::default())
    }

    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> Self {
        PngDecoder {
            seen_hdr: false,
            seen_iend: false,
            idat_count: 0,
            stream: ZByteReader::new(data),
            options,
            info: PngInfo::default(),
            idat: Vec::new()
        }
    }

    pub fn get_dimensions(&self) -> Option<(u32, u32)> {
        self.seen_hdr.then_some((self.info.width, self.info.height))
    }

    fn read_chunk_header(&mut self) -> Result<PngChunk, PngError> {
        let length = self
            .stream
            .get_u32_be_err()
            .map_err(|_| PngError::TruncatedStream)? as usize;
        let chunk = self
            .stream
            .get_u32_be_err()
            .map_err(|_| PngError::TruncatedStream)?
            .to_be_bytes();

        if !self.stream.has(length + 4) {
            return Err(PngError::TruncatedStream);
        }

        Ok(PngChunk { length, chunk, chunk_type: PngChunkType::from_bytes(&chunk) })
    }

    /// Bit 5 (0x20) of a chunk type's first byte is clear for critical
    /// chunks (RFC 2083 §3.2).
    fn is_critical(chunk: &[u8; 4]) -> bool {
        chunk[0] & 0x20 == 0
    }

    fn parse_ihdr(&mut self, chunk: &PngChunk) -> Result<(), PngError> {
        if chunk.length != IHDR_BODY_LEN {
            return Err(PngError::Unsupported("IHDR body is not 13 bytes"));
        }

        let body = self.stream.peek_at(0, IHDR_BODY_LEN).map_err(|_| PngError::TruncatedStream)?;

        let width = u32::from_be_bytes([body[0], body[1], body[2], body[3]]);
        let height = u32::from_be_bytes([body[4], body[5], body[6], body[7]]);
        let depth = body[8];
        let color_type = body[9];
        let compression_method = body[10];
        let filter_method = body[11];
        let interlace_method = body[12];

        self.stream.skip(IHDR_BODY_LEN);

        if depth != 8 {
            return Err(PngError::Unsupported("bit depth other than 8"));
        }
        let color = PngColor::from_u8(color_type)
            .ok_or(PngError::Unsupported("color type is not RGB(2) or RGBA(6)"))?;
        if compression_method != 0 {
            return Err(PngError::Unsupported("compression method is not 0"));
        }
        if filter_method != 0 {
            return Err(PngError::Unsupported("filter method is not 0"));
        }
        if interlace_method != 0 {
            return Err(PngError::Unsupported("interlace method is not 0"));
        }
        if width == 0 || height == 0 {
            return Err(PngError::Unsupported("zero width or height"));
        }
        if width > self.options.max_width || height > self.options.max_height {
            return Err(PngError::Unsupported("image dimensions exceed configured maximum"));
        }

        self.info = PngInfo {
            width,
            height,
            depth,
            color: Some(color),
            filter_method: FilterMethod::Adaptive,
            interlace_method: InterlaceMethod::Standard
        };
        self.seen_hdr = true;

        #[cfg(feature = "log")]
        log::debug!("IHDR: {}x{}, color={:?}", width, height, color);

        Ok(())
    }

    fn parse_idat(&mut self, chunk: &PngChunk) -> Result<(), PngError> {
        let body = self.stream.peek_at(0, chunk.length).map_err(|_| PngError::TruncatedStream)?;
        self.idat.extend_from_slice(body);
        self.stream.skip(chunk.length);
        self.idat_count += 1;
        Ok(())
    }

    /// Read and validate the PNG signature, container-parse every
    /// chunk, inflate the concatenated IDAT payload, and reverse the
    /// per-scanline filters.
    pub fn decode(&mut self) -> Result<DecodedImage, PngError> {
        let signature = self.stream.get_u64_be_err().map_err(|_| PngError::BadSignature)?;
        if signature != PNG_SIGNATURE {
            return Err(PngError::BadSignature);
        }

        while !self.seen_iend {
            let chunk = self.read_chunk_header()?;

            match chunk.chunk_type {
                PngChunkType::IHDR => {
                    if self.seen_hdr {
                        return Err(PngError::Unsupported("duplicate IHDR"));
                    }
                    self.parse_ihdr(&chunk)?;
                }
                PngChunkType::IDAT => {
                    if !self.seen_hdr {
                        return Err(PngError::Unsupported("IDAT before IHDR"));
                    }
                    self.parse_idat(&chunk)?;
                }
                PngChunkType::IEND => {
                    self.seen_iend = true;
                }
                PngChunkType::Unknown => {
                    if Self::is_critical(&chunk.chunk) {
                        return Err(PngError::UnsupportedCriticalChunk(chunk.chunk));
                    }

                    #[cfg(feature = "log")]
                    log::trace!(
                        "skipping ancillary chunk {}",
                        std::str::from_utf8(&chunk.chunk).unwrap_or("????")
                    );

                    self.stream.skip(chunk.length);
                }
            }

            // CRC trailer, never validated.
            self.stream.skip(4);
        }

        if !self.seen_hdr {
            return Err(PngError::Unsupported("no IHDR chunk"));
        }
        if self.idat_count == 0 {
            return Err(PngError::Unsupported("no IDAT chunk"));
        }

        let inflated = scanline_inflate::decode_zlib(&self.idat)?;

        let bpp = self.info.bytes_per_pixel() as usize;
        let pixels =
            defilter(&inflated, self.info.width as usize, self.info.height as usize, bpp)?;

        Ok(DecodedImage {
            width: self.info.width,
            height: self.info.height,
            channels: bpp as u8,
            pixels
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(chunk_type);
        out.extend_from_slice(data);
        out.extend_from_slice(&[0, 0, 0, 0]); // CRC, never checked
    }

    fn ihdr_body(width: u32, height: u32, color_type: u8) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(&width.to_be_bytes());
        v.extend_from_slice(&height.to_be_bytes());
        v.push(8); // depth
        v.push(color_type);
        v.push(0); // compression
        v.push(0); // filter
        v.push(0); // interlace
        v
    }

    /// Build a one-stored-block zlib stream wrapping `raw` bytes
    /// verbatim (BFINAL=1, BTYPE=00).
    fn zlib_stored(raw: &[u8]) -> Vec<u8> {
        let mut out = vec![0x78, 0x01]; // zlib header, CM=8, no FDICT
        out.push(0x01); // BFINAL=1, BTYPE=00 (bits: 1,0,0 -> byte 0b001 = 1)
        out.extend_from_slice(&(raw.len() as u16).to_le_bytes());
        out.extend_from_slice(&(!(raw.len() as u16)).to_le_bytes());
        out.extend_from_slice(raw);
        out
    }

    fn png_with_idat(width: u32, height: u32, color_type: u8, raw: &[u8]) -> Vec<u8> {
        let mut out = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        write_chunk(&mut out, b"IHDR", &ihdr_body(width, height, color_type));
        write_chunk(&mut out, b"IDAT", &zlib_stored(raw));
        write_chunk(&mut out, b"IEND", &[]);
        out
    }

    #[test]
    fn one_by_one_rgb_red() {
        let raw = [0x00, 0xFF, 0x00, 0x00];
        let png = png_with_idat(1, 1, 2, &raw);

        let mut decoder = PngDecoder::new(&png);
        let image = decoder.decode().unwrap();

        assert_eq!((image.width, image.height, image.channels), (1, 1, 3));
        assert_eq!(image.pixels, vec![0xFF, 0x00, 0x00]);
    }

    #[test]
    fn stored_block_passthrough() {
        let mut raw = Vec::new();
        raw.extend_from_slice(&[0x00, 0x10, 0x20, 0x30, 0x40]);
        raw.extend_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44]);
        let png = png_with_idat(1, 2, 6, &raw);

        let mut decoder = PngDecoder::new(&png);
        let image = decoder.decode().unwrap();

        assert_eq!(image.pixels, vec![0x10, 0x20, 0x30, 0x40, 0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn rejects_bad_signature() {
        let mut png = png_with_idat(1, 1, 2, &[0x00, 0xFF, 0x00, 0x00]);
        png[0] = 0x88;

        let mut decoder = PngDecoder::new(&png);
        assert!(decoder.decode().is_err());
    }

    #[test]
    fn rejects_critical_plte_chunk() {
        let mut out = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        write_chunk(&mut out, b"IHDR", &ihdr_body(1, 1, 3));
        write_chunk(&mut out, b"PLTE", &[0, 0, 0]);
        write_chunk(&mut out, b"IEND", &[]);

        let mut decoder = PngDecoder::new(&out);
        assert!(decoder.decode().is_err());
    }

    #[test]
    fn skips_ancillary_chunks() {
        let mut out = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        write_chunk(&mut out, b"IHDR", &ihdr_body(1, 1, 2));
        write_chunk(&mut out, b"tEXt", b"hello");
        write_chunk(&mut out, b"IDAT", &zlib_stored(&[0x00, 0xFF, 0x00, 0x00]));
        write_chunk(&mut out, b"IEND", &[]);

        let mut decoder = PngDecoder::new(&out);
        let image = decoder.decode().unwrap();
        assert_eq!(image.pixels, vec![0xFF, 0x00, 0x00]);
    }
}
