/// The 8-byte PNG file signature, read as one big-endian `u64`.
pub const PNG_SIGNATURE: u64 = 0x8950_4E47_0D0A_1A0A;

/// Byte length of the IHDR chunk body: width, height, depth, color type,
/// compression method, filter method, interlace method.
pub const IHDR_BODY_LEN: usize = 13;
