mod constants;
mod decoder;
mod enums;
mod error;
mod filter;
mod options;

pub use decoder::{DecodedImage, PngDecoder, PngInfo};
pub use enums::{FilterMethod, InterlaceMethod, PngColor};
pub use error::PngError;
pub use options::DecoderOptions;
