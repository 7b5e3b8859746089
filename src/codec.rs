use std::borrow::Cow;
use std::string::FromUtf8Error;

use base64::alphabet;
use base64::engine::{Engine, GeneralPurpose, GeneralPurposeConfig};

/// Standard alphabet, lenient about non-zero bits after the last full byte.
const DECODE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("{0}")]
    Base64(#[from] base64::DecodeError),
    #[error("{0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Number of `=` characters that bring `len` up to a multiple of 4.
pub fn padding_needed(len: usize) -> usize {
    (4 - len % 4) % 4
}

pub fn pad(text: &str) -> Cow<'_, str> {
    match padding_needed(text.len()) {
        0 => Cow::Borrowed(text),
        n => {
            let mut padded = String::with_capacity(text.len() + n);
            padded.push_str(text);
            padded.extend(std::iter::repeat_n('=', n));
            Cow::Owned(padded)
        }
    }
}

/// Pads `text`, decodes it with the standard alphabet and reads the bytes as UTF-8.
pub fn decode_padded(text: &str) -> Result<String, DecodeError> {
    let padded = pad(text);
    log::trace!("[decode] {} -> {}", text, padded);

    let bytes = DECODE_ENGINE.decode(padded.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
