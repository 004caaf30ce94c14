use std::io::Write as _;

use anyhow::Context as _;
use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::canvas::Canvas;
use crate::error::{ArcmarkError, ArcmarkResult};

/// Fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Encode the canvas as a standalone RGBA8 PNG.
pub fn encode_png(canvas: &Canvas) -> ArcmarkResult<Vec<u8>> {
    encode_rgba(canvas.size(), canvas.pixels())
}

/// Encode a raw square RGBA8 buffer (`4 * size * size` bytes) as a PNG.
///
/// Emits IHDR (8-bit truecolor + alpha), one IDAT holding the zlib-compressed
/// scanlines with filter type 0 on every row, and an empty IEND.
pub fn encode_rgba(size: u32, pixels: &[u8]) -> ArcmarkResult<Vec<u8>> {
    if size == 0 {
        return Err(ArcmarkError::invalid_canvas("image is zero-sized"));
    }
    let stride = size as usize * 4;
    if pixels.len() != stride * size as usize {
        return Err(ArcmarkError::invalid_canvas(format!(
            "expected {} pixel bytes for size {size}, got {}",
            stride * size as usize,
            pixels.len()
        )));
    }

    let mut raw = Vec::with_capacity((stride + 1) * size as usize);
    for row in pixels.chunks_exact(stride) {
        raw.push(0); // filter type: none
        raw.extend_from_slice(row);
    }

    let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
    enc.write_all(&raw).context("deflate scanline stream")?;
    let compressed = enc.finish().context("finish deflate stream")?;

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&size.to_be_bytes());
    ihdr.extend_from_slice(&size.to_be_bytes());
    // bit depth 8, color type 6 (truecolor + alpha), deflate, no filter
    // heuristic, no interlace.
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + compressed.len() + 64);
    out.extend_from_slice(&PNG_SIGNATURE);
    push_chunk(&mut out, b"IHDR", &ihdr);
    push_chunk(&mut out, b"IDAT", &compressed);
    push_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// Frame one chunk: u32 BE payload length, tag, payload, CRC-32(tag + payload).
fn push_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(tag);
    hasher.update(payload);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());
}
