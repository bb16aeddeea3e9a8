//! Bitmap Operations - Pure DOP Functions
//!
//! All functions are pure: take data, return results.
//! `decode_bitmap` is the only one that touches the filesystem.

use std::path::Path;

use super::bitmap_data::{BitmapHeader, DecodedImage, RGB_CHANNELS};
use crate::constants::bitmap::{
    COMPRESSION_NONE, FILE_HEADER_SIZE, INFO_HEADER_SIZE, ROW_ALIGNMENT, SIGNATURE,
    SUPPORTED_BITS_PER_PIXEL,
};
use crate::error::{DecodeError, DecodeResult};

fn read_u16(bytes: &[u8], at: usize) -> DecodeResult<u16> {
    let b = bytes.get(at..at + 2).ok_or(DecodeError::Truncated {
        needed: at + 2,
        found: bytes.len(),
    })?;
    Ok(u16::from_le_bytes([b[0], b[1]]))
}

fn read_u32(bytes: &[u8], at: usize) -> DecodeResult<u32> {
    let b = bytes.get(at..at + 4).ok_or(DecodeError::Truncated {
        needed: at + 4,
        found: bytes.len(),
    })?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn read_i32(bytes: &[u8], at: usize) -> DecodeResult<i32> {
    read_u32(bytes, at).map(|v| v as i32)
}

/// Bytes per stored row, padded up to a multiple of 4
pub fn row_stride(width: u32) -> usize {
    let raw = width as usize * RGB_CHANNELS;
    raw.div_ceil(ROW_ALIGNMENT) * ROW_ALIGNMENT
}

/// Parse and validate the 14-byte file header and the info header
pub fn parse_bitmap_header(bytes: &[u8]) -> DecodeResult<BitmapHeader> {
    let signature = bytes.get(0..2).ok_or(DecodeError::Truncated {
        needed: FILE_HEADER_SIZE,
        found: bytes.len(),
    })?;
    if signature != SIGNATURE {
        return Err(DecodeError::InvalidSignature {
            found: [signature[0], signature[1]],
        });
    }

    if bytes.len() < FILE_HEADER_SIZE + INFO_HEADER_SIZE {
        return Err(DecodeError::Truncated {
            needed: FILE_HEADER_SIZE + INFO_HEADER_SIZE,
            found: bytes.len(),
        });
    }

    let header = BitmapHeader {
        data_offset: read_u32(bytes, 10)?,
        info_header_size: read_u32(bytes, 14)?,
        width: read_i32(bytes, 18)?,
        height: read_i32(bytes, 22)?,
        planes: read_u16(bytes, 26)?,
        bits_per_pixel: read_u16(bytes, 28)?,
        compression: read_u32(bytes, 30)?,
    };

    // Older OS/2 core headers lay the fields out differently
    if (header.info_header_size as usize) < INFO_HEADER_SIZE {
        return Err(DecodeError::UnsupportedHeader {
            size: header.info_header_size,
        });
    }
    if header.bits_per_pixel != SUPPORTED_BITS_PER_PIXEL {
        return Err(DecodeError::UnsupportedDepth {
            bits_per_pixel: header.bits_per_pixel,
        });
    }
    if header.compression != COMPRESSION_NONE {
        return Err(DecodeError::Compressed {
            compression: header.compression,
        });
    }
    if header.width <= 0 || header.height == 0 || header.height == i32::MIN {
        return Err(DecodeError::InvalidDimensions {
            width: header.width,
            height: header.height,
        });
    }

    Ok(header)
}

/// Decode an in-memory 24-bit bitmap into top-down RGB
pub fn decode_bitmap_bytes(bytes: &[u8]) -> DecodeResult<DecodedImage> {
    let header = parse_bitmap_header(bytes)?;

    let width = header.width as u32;
    let height = header.height.unsigned_abs();
    let bottom_up = header.height > 0;
    let stride = row_stride(width);
    let row_bytes = width as usize * RGB_CHANNELS;

    // Padding after the final row is not required to be present
    let needed = (height as usize - 1)
        .checked_mul(stride)
        .and_then(|n| n.checked_add(row_bytes))
        .and_then(|n| n.checked_add(header.data_offset as usize))
        .ok_or(DecodeError::InvalidDimensions {
            width: header.width,
            height: header.height,
        })?;
    if bytes.len() < needed {
        return Err(DecodeError::Truncated {
            needed,
            found: bytes.len(),
        });
    }

    let payload = &bytes[header.data_offset as usize..];
    let mut pixels = vec![0u8; row_bytes * height as usize];

    for (y, out_row) in pixels.chunks_exact_mut(row_bytes).enumerate() {
        let stored_row = if bottom_up {
            height as usize - 1 - y
        } else {
            y
        };
        let start = stored_row * stride;
        let row = &payload[start..start + row_bytes];

        for (dst, src) in out_row
            .chunks_exact_mut(RGB_CHANNELS)
            .zip(row.chunks_exact(RGB_CHANNELS))
        {
            dst[0] = src[2];
            dst[1] = src[1];
            dst[2] = src[0];
        }
    }

    Ok(DecodedImage {
        width,
        height,
        pixels,
    })
}

/// Read and decode a bitmap file. The file handle is closed before returning.
pub fn decode_bitmap(path: &Path) -> DecodeResult<DecodedImage> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DecodeError::NotFound {
            path: path.display().to_string(),
        },
        _ => DecodeError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        },
    })?;

    let image = decode_bitmap_bytes(&bytes)?;
    log::debug!(
        "[bitmap_operations::decode_bitmap] {} -> {}x{}",
        path.display(),
        image.width,
        image.height
    );
    Ok(image)
}
