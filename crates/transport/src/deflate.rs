use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flexlayout_traits::{ByteTransport, TransportError};
use std::io::{Read, Write};

/// Largest payload [`DeflateTransport`] inflates by default.
pub const DEFAULT_MAX_INFLATED_BYTES: usize = 16 * 1024 * 1024;

/// Deflate with zlib framing, run on tokio's blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct DeflateTransport {
    level: u32,
    max_inflated: usize,
}

impl DeflateTransport {
    /// Creates a transport with the given compression level, clamped to 0..=9.
    pub fn new(level: u32) -> Self {
        Self {
            level: level.min(9),
            max_inflated: DEFAULT_MAX_INFLATED_BYTES,
        }
    }

    /// Caps how many bytes `decompress` may produce before failing.
    pub fn with_max_inflated(mut self, bytes: usize) -> Self {
        self.max_inflated = bytes;
        self
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_inflated(&self) -> usize {
        self.max_inflated
    }
}

impl Default for DeflateTransport {
    fn default() -> Self {
        Self::new(Compression::default().level())
    }
}

fn deflate(data: &[u8], level: u32) -> Result<Vec<u8>, TransportError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(data)
        .map_err(|e| TransportError::Compress(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| TransportError::Compress(e.to_string()))
}

fn inflate(data: &[u8], limit: usize) -> Result<Vec<u8>, TransportError> {
    let mut decoder = ZlibDecoder::new(data).take(limit as u64 + 1);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| TransportError::Decompress(e.to_string()))?;
    if out.len() > limit {
        return Err(TransportError::Decompress(format!(
            "inflated data exceeds {} bytes",
            limit
        )));
    }
    Ok(out)
}

impl ByteTransport for DeflateTransport {
    async fn compress(&self, data: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let level = self.level;
        let input_len = data.len();
        let packed = tokio::task::spawn_blocking(move || deflate(&data, level))
            .await
            .map_err(|e| TransportError::Task(e.to_string()))??;
        log::debug!("Deflated {} bytes to {} (level {})", input_len, packed.len(), level);
        Ok(packed)
    }

    async fn decompress(&self, data: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let limit = self.max_inflated;
        tokio::task::spawn_blocking(move || inflate(&data, limit))
            .await
            .map_err(|e| TransportError::Task(e.to_string()))?
    }

    fn name(&self) -> &'static str {
        "DeflateTransport"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let transport = DeflateTransport::default();
        let input = b"<Layout><Box id=\"a\"/></Layout>".repeat(20);
        let packed = transport.compress(input.clone()).await.unwrap();
        assert!(packed.len() < input.len());
        assert_eq!(transport.decompress(packed).await.unwrap(), input);
    }

    #[tokio::test]
    async fn test_zlib_header() {
        let packed = DeflateTransport::default()
            .compress(b"hello".to_vec())
            .await
            .unwrap();
        // CMF byte for deflate with a 32K window
        assert_eq!(packed[0], 0x78);
        assert_eq!(((packed[0] as u16) << 8 | packed[1] as u16) % 31, 0);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let transport = DeflateTransport::new(9);
        let packed = transport.compress(Vec::new()).await.unwrap();
        assert!(transport.decompress(packed).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_input_is_rejected() {
        let err = DeflateTransport::default()
            .decompress(vec![0xde, 0xad, 0xbe, 0xef])
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Decompress(_)));
    }

    #[tokio::test]
    async fn test_inflated_size_is_capped() {
        let transport = DeflateTransport::default().with_max_inflated(1024);
        let packed = transport.compress(vec![0; 1024]).await.unwrap();
        assert_eq!(transport.decompress(packed).await.unwrap().len(), 1024);

        let bomb = transport.compress(vec![0; 1025]).await.unwrap();
        assert!(bomb.len() < 64);
        let err = transport.decompress(bomb).await.unwrap_err();
        assert!(matches!(err, TransportError::Decompress(_)));
    }

    #[test]
    fn test_level_is_clamped() {
        assert_eq!(DeflateTransport::new(42).level(), 9);
        assert_eq!(DeflateTransport::default().level(), 6);
        assert_eq!(DeflateTransport::new(1).max_inflated(), DEFAULT_MAX_INFLATED_BYTES);
    }
}
