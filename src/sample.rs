use crate::charset::Charset;
use crate::error::{Result, TokenError};

/// Draw `count` indices, each independently uniform over `0..charset.len()`.
///
/// Bytes from the operating system are sliced MSB-first into chunks of
/// `index_bits` bits. A chunk at or above the alphabet size is discarded
/// rather than wrapped, which is what keeps the draw uniform. Each round
/// requests enough bytes to cover the remaining need at the expected
/// rejection rate, so a second round is rare.
///
/// # Errors
///
/// Returns `EntropyFailure` if the operating system entropy source fails.
/// There is no fallback source.
pub fn sample(charset: &Charset, count: usize) -> Result<Vec<usize>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let base = charset.len();
    let width = charset.index_bits();
    let mut indices = Vec::with_capacity(count);

    while indices.len() < count {
        let mut buffer = vec![0_u8; charset.byte_budget(count - indices.len())];
        getrandom::fill(&mut buffer).map_err(|error| TokenError::EntropyFailure {
            reason: error.to_string(),
        })?;
        indices.extend(BitChunks::new(&buffer, width).filter(|&value| value < base));
    }

    indices.truncate(count);
    Ok(indices)
}

/// Iterator over consecutive `width`-bit big-endian chunks of a byte slice.
/// Chunks run across byte boundaries; trailing bits that cannot fill a whole
/// chunk are dropped.
struct BitChunks<'a> {
    bytes: &'a [u8],
    width: usize,
    cursor: usize,
}

impl<'a> BitChunks<'a> {
    fn new(bytes: &'a [u8], width: usize) -> Self {
        Self {
            bytes,
            width,
            cursor: 0,
        }
    }
}

impl Iterator for BitChunks<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let end = self.cursor + self.width;
        if end > self.bytes.len() * 8 {
            return None;
        }
        let mut value = 0;
        for offset in self.cursor..end {
            let bit = (self.bytes[offset / 8] >> (7 - offset % 8)) & 1;
            value = (value << 1) | usize::from(bit);
        }
        self.cursor = end;
        Some(value)
    }
}
