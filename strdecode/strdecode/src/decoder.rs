//! Region decoder and its builder.

use rayon::prelude::*;
use strdecode_core::{ByteRegion, ByteSource, Charset, DecodeError};

use crate::{error::StrDecodeError, scratch, single_byte, utf16};

/// Largest region, in bytes, copied through the thread-local scratch array.
pub const DEFAULT_SCRATCH_LIMIT: usize = 1024;

/// Stateless decoder from byte regions to owned strings.
///
/// Decoding never moves a buffer's reader index and never writes to the
/// buffer, so one decoder can be shared across threads and calls repeat
/// exactly.
#[derive(Debug, Clone)]
pub struct StringDecoder {
    scratch_limit: usize,
}

/// Builder for configuring [`StringDecoder`].
#[derive(Debug, Clone)]
pub struct StringDecoderBuilder {
    scratch_limit: usize,
}

impl StringDecoder {
    /// Create a builder for [`StringDecoder`].
    pub fn builder() -> StringDecoderBuilder {
        StringDecoderBuilder {
            scratch_limit: DEFAULT_SCRATCH_LIMIT,
        }
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn scratch_limit(&self) -> usize {
        self.scratch_limit
    }

    /// Decode `region` under `charset`.
    ///
    /// An empty region is the empty string for every charset.
    pub fn decode<S>(
        &self,
        region: ByteRegion<'_, S>,
        charset: Charset,
    ) -> Result<String, DecodeError>
    where
        S: ByteSource + ?Sized,
    {
        if region.is_empty() {
            return Ok(String::new());
        }

        let result = match region.as_contiguous() {
            Some(bytes) => decode_slice(bytes, charset),
            None => {
                tracing::trace!(
                    offset = region.offset(),
                    len = region.len(),
                    storage = %region.source().storage_kind(),
                    "region has no contiguous view"
                );
                scratch::with_region_copy(region, self.scratch_limit, |bytes| {
                    decode_slice(bytes, charset)
                })
            }
        };

        if let Err(err) = &result {
            tracing::debug!(
                %charset,
                offset = region.offset(),
                len = region.len(),
                error = %err,
                "decode failed"
            );
        }
        result
    }

    /// Decode every region on the rayon pool. Results keep the input order.
    pub fn decode_all<S>(
        &self,
        regions: &[ByteRegion<'_, S>],
        charset: Charset,
    ) -> Vec<Result<String, DecodeError>>
    where
        S: ByteSource + Sync + ?Sized,
    {
        regions
            .par_iter()
            .map(|region| self.decode(*region, charset))
            .collect()
    }
}

impl Default for StringDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StringDecoderBuilder {
    /// Regions longer than `limit` bytes that need copying get a fresh array
    /// instead of the thread-local scratch.
    pub fn scratch_limit(mut self, limit: usize) -> Self {
        self.scratch_limit = limit;
        self
    }

    pub fn build(self) -> StringDecoder {
        StringDecoder {
            scratch_limit: self.scratch_limit,
        }
    }
}

/// Decode a plain byte slice under `charset`.
pub fn decode_slice(bytes: &[u8], charset: Charset) -> Result<String, DecodeError> {
    match charset {
        Charset::UsAscii => Ok(single_byte::decode_ascii(bytes)),
        Charset::Iso8859_1 => Ok(single_byte::decode_latin1(bytes)),
        Charset::Utf16 => utf16::decode_utf16(bytes),
    }
}

/// Decode `len` bytes of `source` starting at `offset`.
///
/// `offset` is absolute within the buffer; the reader index is neither
/// consulted nor moved.
pub fn decode_string<S>(
    source: &S,
    offset: usize,
    len: usize,
    charset: Charset,
) -> Result<String, StrDecodeError>
where
    S: ByteSource + ?Sized,
{
    let region = ByteRegion::new(source, offset, len)?;
    Ok(StringDecoder::new().decode(region, charset)?)
}
