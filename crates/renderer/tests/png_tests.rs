//! Structure of encoded PNG files, checked by walking the chunk list.

use flate2::read::ZlibDecoder;
use renderer::png::{create_png, create_png_auto};
use std::io::Read;

/// (type, data) for every chunk after the signature.
fn chunks(png: &[u8]) -> Vec<(String, Vec<u8>)> {
    assert_eq!(&png[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    let mut out = Vec::new();
    let mut pos = 8;
    while pos < png.len() {
        let len = u32::from_be_bytes(png[pos..pos + 4].try_into().unwrap()) as usize;
        let kind = String::from_utf8(png[pos + 4..pos + 8].to_vec()).unwrap();
        let data = png[pos + 8..pos + 8 + len].to_vec();
        let crc = u32::from_be_bytes(png[pos + 8 + len..pos + 12 + len].try_into().unwrap());
        assert_eq!(crc, crc32fast::hash(&png[pos + 4..pos + 8 + len]), "bad CRC in {kind}");
        out.push((kind, data));
        pos += 12 + len;
    }
    out
}

fn inflate(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
    out
}

#[test]
fn test_rgba_png_layout() {
    let pixels: Vec<u8> = (0..2 * 3).flat_map(|i| [i as u8, 0, 0, 255]).collect();
    let png = create_png(&pixels, 2, 3).unwrap();
    let chunks = chunks(&png);

    let kinds: Vec<&str> = chunks.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(kinds, vec!["IHDR", "IDAT", "IEND"]);

    let ihdr = &chunks[0].1;
    assert_eq!(&ihdr[0..4], &2u32.to_be_bytes());
    assert_eq!(&ihdr[4..8], &3u32.to_be_bytes());
    assert_eq!(ihdr[9], 6);

    let raw = inflate(&chunks[1].1);
    assert_eq!(raw.len(), 3 * (1 + 2 * 4));
    assert_eq!(raw[0], 0);
    assert_eq!(&raw[1..5], &[0, 0, 0, 255]);
}

#[test]
fn test_auto_uses_indexed_for_few_colors() {
    let pixels: Vec<u8> = (0..16).flat_map(|i| if i % 2 == 0 { [0, 0, 0, 0] } else { [255, 128, 0, 255] }).collect();
    let png = create_png_auto(&pixels, 4, 4).unwrap();
    let chunks = chunks(&png);

    assert_eq!(chunks[0].1[9], 3);
    let kinds: Vec<&str> = chunks.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(kinds, vec!["IHDR", "PLTE", "tRNS", "IDAT", "IEND"]);
    assert_eq!(chunks[1].1.len(), 2 * 3);

    let raw = inflate(&chunks[3].1);
    assert_eq!(raw.len(), 4 * (1 + 4));
}

#[test]
fn test_auto_falls_back_to_rgba() {
    let pixels: Vec<u8> = (0..400u32)
        .flat_map(|i| [(i % 256) as u8, (i / 256) as u8, 7, 255])
        .collect();
    let png = create_png_auto(&pixels, 20, 20).unwrap();
    assert_eq!(chunks(&png)[0].1[9], 6);
}
