#![allow(dead_code)]

use std::path::{Path, PathBuf};

use ndarray::Array2;

pub const FITS_BLOCK_SIZE: usize = 2880;
pub const FITS_CARD_SIZE: usize = 80;

/// Format a fixed-format value card: keyword padded to 8, "= ", value
/// right-aligned to column 30.
pub fn card(keyword: &str, value: &str) -> String {
    format!("{:<8}= {:>20}", keyword, value)
}

/// Format a string-valued card.
pub fn string_card(keyword: &str, value: &str) -> String {
    format!("{:<8}= '{}'", keyword, value.replace('\'', "''"))
}

/// Build a header unit from cards: each padded to 80 bytes, END appended,
/// total padded with spaces to a multiple of 2880.
pub fn header_unit(cards: &[String]) -> Vec<u8> {
    let mut buf = Vec::new();
    for c in cards.iter().map(String::as_str).chain(std::iter::once("END")) {
        assert!(c.len() <= FITS_CARD_SIZE, "card too long: {c}");
        buf.extend_from_slice(c.as_bytes());
        buf.resize(buf.len() + FITS_CARD_SIZE - c.len(), b' ');
    }
    let padded = buf.len().div_ceil(FITS_BLOCK_SIZE) * FITS_BLOCK_SIZE;
    buf.resize(padded, b' ');
    buf
}

/// Mandatory primary header cards for a 2-D image.
pub fn image_cards(bitpix: i64, width: usize, height: usize) -> Vec<String> {
    vec![
        card("SIMPLE", "T"),
        card("BITPIX", &bitpix.to_string()),
        card("NAXIS", "2"),
        card("NAXIS1", &width.to_string()),
        card("NAXIS2", &height.to_string()),
    ]
}

/// Append a data unit, zero-padded to a block boundary.
pub fn append_data(buf: &mut Vec<u8>, data: &[u8]) {
    buf.extend_from_slice(data);
    let padded = buf.len().div_ceil(FITS_BLOCK_SIZE) * FITS_BLOCK_SIZE;
    buf.resize(padded, 0);
}

/// Complete FITS file from big-endian sample bytes and extra header cards.
pub fn build_fits(bitpix: i64, width: usize, height: usize, extra_cards: &[String], raw: &[u8]) -> Vec<u8> {
    let mut cards = image_cards(bitpix, width, height);
    cards.extend_from_slice(extra_cards);
    let mut buf = header_unit(&cards);
    append_data(&mut buf, raw);
    buf
}

/// Complete FITS file with BITPIX = -64 samples.
pub fn build_fits_f64(data: &Array2<f64>) -> Vec<u8> {
    let (h, w) = data.dim();
    let mut buf = header_unit(&image_cards(-64, w, h));
    let raw: Vec<u8> = data.iter().flat_map(|v| v.to_be_bytes()).collect();
    append_data(&mut buf, &raw);
    buf
}

/// Complete FITS file with BITPIX = 16 samples and extra header cards.
pub fn build_fits_i16(data: &Array2<i16>, extra_cards: &[String]) -> Vec<u8> {
    let (h, w) = data.dim();
    let mut cards = image_cards(16, w, h);
    cards.extend_from_slice(extra_cards);
    let mut buf = header_unit(&cards);
    let raw: Vec<u8> = data.iter().flat_map(|v| v.to_be_bytes()).collect();
    append_data(&mut buf, &raw);
    buf
}

/// Write bytes to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write test file");
    path
}

/// Write an f64 image as a FITS file in `dir`.
pub fn write_fits(dir: &Path, name: &str, data: &Array2<f64>) -> PathBuf {
    write_file(dir, name, &build_fits_f64(data))
}

/// Zero image with filled squares: `(top, left, side, value)`.
pub fn image_with_squares(height: usize, width: usize, squares: &[(usize, usize, usize, f64)]) -> Array2<f64> {
    let mut data = Array2::<f64>::zeros((height, width));
    for &(top, left, side, value) in squares {
        for row in top..top + side {
            for col in left..left + side {
                data[[row, col]] = value;
            }
        }
    }
    data
}
