//! Text codecs for stored values.
//!
//! A codec turns a value into the string written to the store and back.
//! `JsonCodec` is the default and covers any serde type. `FromStrCodec`
//! stores the `Display` form, so a `String` lands in the store without JSON
//! quotes.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error returned by [`Codec::encode`] or [`Codec::decode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("failed to encode value: {0}")]
    Encode(String),
    #[error("failed to decode stored text: {0}")]
    Decode(String),
}

/// Lossless text round-trip for values of type `T`.
pub trait Codec<T>: Send + Sync {
    fn encode(&self, value: &T) -> Result<String, CodecError>;
    fn decode(&self, text: &str) -> Result<T, CodecError>;
}

/// JSON via `serde_json`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl<T> Codec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &T) -> Result<String, CodecError> {
        serde_json::to_string(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, text: &str) -> Result<T, CodecError> {
        serde_json::from_str(text).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

/// `Display` to encode, `FromStr` to decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FromStrCodec;

impl<T> Codec<T> for FromStrCodec
where
    T: Display + FromStr,
    T::Err: Display,
{
    fn encode(&self, value: &T) -> Result<String, CodecError> {
        Ok(value.to_string())
    }

    fn decode(&self, text: &str) -> Result<T, CodecError> {
        text.parse::<T>().map_err(|e| CodecError::Decode(e.to_string()))
    }
}
