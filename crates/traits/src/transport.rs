//! ByteTransport trait for the compression stage of permalinks.

use std::fmt::Debug;
use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Compression failed: {0}")]
    Compress(String),

    #[error("Decompression failed: {0}")]
    Decompress(String),

    #[error("Transport task failed: {0}")]
    Task(String),
}

/// Reversible async byte transform.
///
/// `decompress(compress(b)) == b` must hold for every input. Either
/// direction may suspend; the codec awaits both before touching text.
pub trait ByteTransport: Send + Sync + Debug {
    fn compress(
        &self,
        data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;

    fn decompress(
        &self,
        data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, TransportError>> + Send;

    /// Returns a human-readable name for this transport (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Identity transport. Useful where the payload should stay inspectable.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTransport;

impl ByteTransport for PassthroughTransport {
    async fn compress(&self, data: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        Ok(data)
    }

    async fn decompress(&self, data: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        Ok(data)
    }

    fn name(&self) -> &'static str {
        "PassthroughTransport"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passthrough_is_identity() {
        let transport = PassthroughTransport;
        let packed = transport.compress(b"abc".to_vec()).await.unwrap();
        assert_eq!(packed, b"abc");
        assert_eq!(transport.decompress(packed).await.unwrap(), b"abc");
    }
}
