//! URL-safe base64 without padding.
//!
//! Encoding uses `-` and `_` and never emits `=`. Decoding also accepts the
//! standard alphabet and padded input, so links that were mangled by a
//! mail client or hand-edited still open.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

pub use base64::DecodeError;

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode(data: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(data)
}

pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let normalized: String = text
        .trim()
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_LENIENT.decode(normalized)
}
