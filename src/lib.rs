pub mod error;
pub mod file_base64;
pub mod logger;

pub use error::{Result, TranscodeError};
pub use file_base64::{TranscodeResult, decode_file, default_encoded_path, encode_file};
