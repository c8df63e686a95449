use std::fs;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};

use crate::error::{Result, TranscodeError};

/// Report of one transcode run: where it read, where it wrote, and the size
/// on each side (bytes for raw content, characters for base64 text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeResult {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub input_size: usize,
    pub output_size: usize,
}

/// Default output path for [`encode_file`]: `<stem>_encoded.txt` in the same
/// directory as the input. Only the final extension is stripped, so
/// `archive.tar.gz` derives `archive.tar_encoded.txt`.
pub fn default_encoded_path(input_path: &Path) -> PathBuf {
    let mut name = input_path.file_stem().unwrap_or_default().to_os_string();
    name.push("_encoded.txt");
    input_path.with_file_name(name)
}

/// Base64 encode a file and write the encoded text to `output_path`,
/// or to [`default_encoded_path`] when no output path is given.
/// The whole input is buffered in memory; the output is plain RFC 4648
/// base64 with `=` padding, no line wrapping.
pub fn encode_file(input_path: &Path, output_path: Option<&Path>) -> Result<TranscodeResult> {
    if !input_path.exists() {
        return Err(TranscodeError::NotFound(input_path.to_path_buf()));
    }

    let data = fs::read(input_path)?;
    let encoded = general_purpose::STANDARD.encode(&data);

    let output_path = match output_path {
        Some(path) => path.to_path_buf(),
        None => default_encoded_path(input_path),
    };
    fs::write(&output_path, &encoded)?;

    log::debug!(
        "[encode] {} bytes -> {} characters into {}",
        data.len(),
        encoded.len(),
        output_path.display()
    );

    Ok(TranscodeResult {
        input_file: input_path.to_path_buf(),
        output_file: output_path,
        input_size: data.len(),
        output_size: encoded.len(),
    })
}

/// Decode a base64 text file back to its original bytes and write them to
/// `output_path`. Whitespace around the text is ignored; anything else
/// outside the RFC 4648 alphabet (including interior line breaks) is a
/// decode error. The output file is only created once decoding succeeded.
pub fn decode_file(input_path: &Path, output_path: &Path) -> Result<TranscodeResult> {
    if !input_path.exists() {
        return Err(TranscodeError::NotFound(input_path.to_path_buf()));
    }

    let text = fs::read(input_path)?;
    let trimmed = text.trim_ascii();
    let decoded = general_purpose::STANDARD.decode(trimmed)?;

    fs::write(output_path, &decoded)?;

    log::debug!(
        "[decode] {} characters -> {} bytes into {}",
        trimmed.len(),
        decoded.len(),
        output_path.display()
    );

    Ok(TranscodeResult {
        input_file: input_path.to_path_buf(),
        output_file: output_path.to_path_buf(),
        input_size: trimmed.len(),
        output_size: decoded.len(),
    })
}
