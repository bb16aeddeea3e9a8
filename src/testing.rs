//! Bitmap fixtures shared by unit and integration tests

use std::path::{Path, PathBuf};

/// Serialize a 24-bit uncompressed bitmap. `pixel(x, y)` returns RGB for the
/// visual row `y` (0 = top).
pub fn bitmap_bytes(
    width: u32,
    height: u32,
    top_down: bool,
    pixel: impl Fn(u32, u32) -> [u8; 3],
) -> Vec<u8> {
    bitmap_bytes_with_header(40, width, height, top_down, pixel)
}

/// Same as `bitmap_bytes` with an info header of `info_header_size` bytes.
/// Fields past the first 40 bytes (V4/V5 masks, color space) are zero.
pub fn bitmap_bytes_with_header(
    info_header_size: u32,
    width: u32,
    height: u32,
    top_down: bool,
    pixel: impl Fn(u32, u32) -> [u8; 3],
) -> Vec<u8> {
    let stride = ((width * 3 + 3) / 4 * 4) as usize;
    let data_offset = 14 + info_header_size.max(40);
    let file_size = data_offset as usize + stride * height as usize;

    let mut bytes = Vec::with_capacity(file_size);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&(file_size as u32).to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&data_offset.to_le_bytes());

    let stored_height = if top_down {
        -(height as i32)
    } else {
        height as i32
    };
    bytes.extend_from_slice(&info_header_size.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&stored_height.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&((stride * height as usize) as u32).to_le_bytes());
    bytes.extend_from_slice(&2835i32.to_le_bytes());
    bytes.extend_from_slice(&2835i32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.resize(data_offset as usize, 0);

    for stored_row in 0..height {
        let y = if top_down {
            stored_row
        } else {
            height - 1 - stored_row
        };
        let row_start = bytes.len();
        for x in 0..width {
            let [r, g, b] = pixel(x, y);
            bytes.extend_from_slice(&[b, g, r]);
        }
        bytes.resize(row_start + stride, 0);
    }

    bytes
}

/// Write a solid-colored bitmap into `dir` and return its path
pub fn write_bitmap(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bitmap_bytes(width, height, false, |_, _| color))
        .expect("Failed to write test bitmap");
    path
}
