//! Raster Operations - Pure DOP Functions
//!
//! All functions are pure: take data, return results, no side effects.
//! No methods, no self, just transformations.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use super::raster_data::{ColorMode, PngHeader};
use crate::compositor::AtlasBuffer;
use crate::constants::raster::{
    BIT_DEPTH, COLOR_TYPE_RGB, COLOR_TYPE_RGBA, FILTER_NONE, MAX_DATA_CHUNK, SIGNATURE,
};
use crate::error::{AtlasError, AtlasResult};

const IHDR: [u8; 4] = *b"IHDR";
const IDAT: [u8; 4] = *b"IDAT";
const IEND: [u8; 4] = *b"IEND";

fn channels(mode: ColorMode) -> usize {
    match mode {
        ColorMode::Rgb => 3,
        ColorMode::Rgba => 4,
    }
}

fn color_type(mode: ColorMode) -> u8 {
    match mode {
        ColorMode::Rgb => COLOR_TYPE_RGB,
        ColorMode::Rgba => COLOR_TYPE_RGBA,
    }
}

/// CRC32 over chunk kind followed by payload
pub fn chunk_crc(kind: &[u8; 4], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(kind);
    hasher.update(payload);
    hasher.finalize()
}

fn write_chunk(out: &mut Vec<u8>, kind: [u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(&kind);
    out.extend_from_slice(payload);
    out.extend_from_slice(&chunk_crc(&kind, payload).to_be_bytes());
}

/// Raw scanline stream: each row prefixed with the "none" filter byte
pub fn scanlines(pixels: &[u8], width: u32, mode: ColorMode) -> Vec<u8> {
    let row_bytes = width as usize * channels(mode);
    if row_bytes == 0 {
        return Vec::new();
    }

    let rows = pixels.len() / row_bytes;
    let mut out = Vec::with_capacity(rows * (row_bytes + 1));
    for row in pixels.chunks_exact(row_bytes) {
        out.push(FILTER_NONE);
        out.extend_from_slice(row);
    }
    out
}

/// IHDR payload: dimensions, depth, color type, then compression, filter
/// and interlace methods, all zero
fn header_payload(header: &PngHeader) -> Vec<u8> {
    let mut payload = Vec::with_capacity(13);
    payload.extend_from_slice(&header.width.to_be_bytes());
    payload.extend_from_slice(&header.height.to_be_bytes());
    payload.push(header.bit_depth);
    payload.push(header.color_type);
    payload.extend_from_slice(&[0, 0, 0]);
    payload
}

/// zlib-wrapped DEFLATE, as IDAT requires
fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Encode a pixel buffer as PNG
pub fn encode_png(pixels: &[u8], width: u32, height: u32, mode: ColorMode) -> AtlasResult<Vec<u8>> {
    if width == 0 || height == 0 {
        return Err(AtlasError::Encode(format!(
            "PNG dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    let expected = width as usize * height as usize * channels(mode);
    if pixels.len() != expected {
        return Err(AtlasError::Encode(format!(
            "expected {} bytes of pixel data for {}x{}, got {}",
            expected,
            width,
            height,
            pixels.len()
        )));
    }

    let compressed =
        deflate(&scanlines(pixels, width, mode)).map_err(|e| AtlasError::Encode(e.to_string()))?;

    let header = PngHeader {
        width,
        height,
        bit_depth: BIT_DEPTH,
        color_type: color_type(mode),
    };

    let mut out = Vec::with_capacity(compressed.len() + 64);
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, IHDR, &header_payload(&header));
    for data in compressed.chunks(MAX_DATA_CHUNK) {
        write_chunk(&mut out, IDAT, data);
    }
    write_chunk(&mut out, IEND, &[]);
    Ok(out)
}

/// Encode a composited atlas as an RGBA PNG
pub fn encode_atlas(atlas: &AtlasBuffer) -> AtlasResult<Vec<u8>> {
    let bytes = encode_png(atlas.as_raw(), atlas.width(), atlas.height(), ColorMode::Rgba)?;
    log::debug!(
        "[raster_operations::encode_atlas] {}x{} atlas -> {} bytes",
        atlas.width(),
        atlas.height(),
        bytes.len()
    );
    Ok(bytes)
}
