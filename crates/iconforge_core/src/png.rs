//! Minimal PNG encoder for solid-color images.
//!
//! Emits exactly four parts: the 8-byte signature, an IHDR chunk, a single
//! IDAT chunk holding the zlib-compressed scanlines, and an empty IEND
//! chunk. Output is always non-interlaced, 8-bit-per-channel truecolor
//! (color type 2, no alpha) with filter type None on every row. This is not
//! a general-purpose encoder: no palettes, no interlacing, no other bit
//! depths, no decoding.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};

use crate::error::IconforgeError;

/// The fixed 8-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// A PNG chunk type tag.
pub type ChunkType = [u8; 4];

/// Image header
pub const IHDR: ChunkType = *b"IHDR";
/// Image data
pub const IDAT: ChunkType = *b"IDAT";
/// Image trailer
pub const IEND: ChunkType = *b"IEND";

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Encode a solid-color image as a complete PNG byte stream.
///
/// Any conforming decoder reproduces `width` x `height` pixels of `color`
/// at full opacity. The compression level is fixed, so the same inputs
/// always produce byte-identical output.
pub fn encode(width: u32, height: u32, color: Rgb) -> Result<Vec<u8>, IconforgeError> {
    if width == 0 || height == 0 {
        return Err(IconforgeError::invalid_dimension(width, height));
    }

    let mut out = Vec::new();
    out.extend_from_slice(&SIGNATURE);

    // IHDR payload: dimensions, bit depth 8, color type 2 (truecolor,
    // no alpha), compression 0, filter 0, interlace 0.
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);
    write_chunk(&mut out, IHDR, &ihdr);

    // Raw scanlines: one filter-type byte (0 = None) then W RGB pixels
    // per row.
    let Rgb(r, g, b) = color;
    let row_len = 1 + 3 * width as usize;
    let mut raw = Vec::with_capacity(height as usize * row_len);
    for _ in 0..height {
        raw.push(0);
        for _ in 0..width {
            raw.extend_from_slice(&[r, g, b]);
        }
    }

    let compressed = deflate(&raw)?;
    write_chunk(&mut out, IDAT, &compressed);
    write_chunk(&mut out, IEND, &[]);

    Ok(out)
}

/// Compress the scanline buffer as a zlib stream at the default level.
fn deflate(data: &[u8]) -> Result<Vec<u8>, IconforgeError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| IconforgeError::io_with_source("Failed to compress pixel data", e))?;
    encoder
        .finish()
        .map_err(|e| IconforgeError::io_with_source("Failed to finish zlib stream", e))
}

/// Serialize one chunk: big-endian payload length, 4-byte type tag, the
/// payload, then a big-endian CRC-32 computed over tag ++ payload.
fn write_chunk(out: &mut Vec<u8>, tag: ChunkType, payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(&tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&chunk_crc(tag, payload).to_be_bytes());
}

/// Standard CRC-32 (ISO 3309) over the chunk type tag and payload.
fn chunk_crc(tag: ChunkType, payload: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(&tag);
    crc.update(payload);
    crc.sum()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    /// Walk the chunk sequence after the signature, returning
    /// (tag, payload, stored CRC) for each chunk.
    fn chunks(png: &[u8]) -> Vec<(ChunkType, Vec<u8>, u32)> {
        assert_eq!(&png[..8], &SIGNATURE, "missing PNG signature");
        let mut rest = &png[8..];
        let mut out = Vec::new();
        while !rest.is_empty() {
            let len = u32::from_be_bytes(rest[0..4].try_into().unwrap()) as usize;
            let tag: ChunkType = rest[4..8].try_into().unwrap();
            let payload = rest[8..8 + len].to_vec();
            let crc = u32::from_be_bytes(rest[8 + len..12 + len].try_into().unwrap());
            out.push((tag, payload, crc));
            rest = &rest[12 + len..];
        }
        out
    }

    /// Inflate the IDAT payload back into raw scanlines.
    fn inflate(idat: &[u8]) -> Vec<u8> {
        let mut raw = Vec::new();
        ZlibDecoder::new(idat).read_to_end(&mut raw).unwrap();
        raw
    }

    #[test]
    fn test_chunk_order_is_ihdr_idat_iend() {
        let png = encode(48, 48, Rgb(0, 150, 136)).unwrap();
        let chunks = chunks(&png);
        let tags: Vec<ChunkType> = chunks.iter().map(|(tag, _, _)| *tag).collect();
        assert_eq!(tags, vec![IHDR, IDAT, IEND]);
        assert!(chunks[2].1.is_empty(), "IEND must have an empty payload");
    }

    #[test]
    fn test_ihdr_fields() {
        let png = encode(48, 72, Rgb(1, 2, 3)).unwrap();
        let (tag, payload, _) = chunks(&png).remove(0);
        assert_eq!(tag, IHDR);
        assert_eq!(payload.len(), 13);
        assert_eq!(u32::from_be_bytes(payload[0..4].try_into().unwrap()), 48);
        assert_eq!(u32::from_be_bytes(payload[4..8].try_into().unwrap()), 72);
        // bit depth, color type, compression, filter, interlace
        assert_eq!(&payload[8..13], &[8, 2, 0, 0, 0]);
    }

    #[test]
    fn test_every_chunk_crc_matches() {
        let png = encode(16, 16, Rgb(255, 0, 255)).unwrap();
        for (tag, payload, stored) in chunks(&png) {
            assert_eq!(stored, chunk_crc(tag, &payload), "bad CRC for {:?}", tag);
        }
    }

    #[test]
    fn test_scanlines_decode_to_input_color() {
        let (w, h) = (48u32, 48u32);
        let color = Rgb(0, 150, 136);
        let png = encode(w, h, color).unwrap();
        let chunks = chunks(&png);

        let raw = inflate(&chunks[1].1);
        let row_len = 1 + 3 * w as usize;
        assert_eq!(raw.len(), h as usize * row_len);

        for row in raw.chunks_exact(row_len) {
            assert_eq!(row[0], 0, "filter type must be None");
            for pixel in row[1..].chunks_exact(3) {
                assert_eq!(pixel, &[color.0, color.1, color.2]);
            }
        }
    }

    #[test]
    fn test_single_black_pixel() {
        let png = encode(1, 1, Rgb(0, 0, 0)).unwrap();
        let chunks = chunks(&png);
        assert_eq!(chunks.len(), 3);
        assert_eq!(inflate(&chunks[1].1), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let err = encode(0, 48, Rgb(0, 0, 0)).unwrap_err();
        assert!(matches!(err, IconforgeError::InvalidDimension { width: 0, height: 48 }));
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let err = encode(48, 0, Rgb(0, 0, 0)).unwrap_err();
        assert!(matches!(err, IconforgeError::InvalidDimension { width: 48, height: 0 }));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = encode(96, 96, Rgb(0, 150, 136)).unwrap();
        let b = encode(96, 96, Rgb(0, 150, 136)).unwrap();
        assert_eq!(a, b);
    }
}
