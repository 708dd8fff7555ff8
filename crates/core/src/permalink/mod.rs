//! Compact, URL-embeddable encoding of a whole project.
//!
//! The pipeline is: neutral tree -> dictionary-compacted wire tuple -> CBOR
//! -> [`ByteTransport`](flexlayout_traits::ByteTransport) compression ->
//! URL-safe base64.

pub mod codec;
pub mod dictionary;
pub mod wire;

pub use codec::{ProjectData, decode_permalink, encode_permalink, pack, unpack};
pub use dictionary::{StyleKeyDictionary, TypeDictionary};
