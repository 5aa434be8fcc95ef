pub mod codec;
pub mod color;
pub mod decode;
pub mod encode;
pub mod error;
pub mod fastq;
pub mod image_io;
pub mod layout;
pub mod utils;

pub use decode::DecodeOptions;
pub use encode::EncodeOptions;
pub use error::PixelDnaError;
