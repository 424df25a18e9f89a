//! Shared test-only helpers. Rendering lives here rather than in `src/`
//! since pixel output is out of the crate's scope; it exists purely to
//! let `rqrr` decode what we built, the way the teacher's own builder
//! tests do.

use image::{GrayImage, Luma};
use qr_forge::QrCode;

/// Renders `qr` to a grayscale image with a 4-module quiet zone, the
/// same layout `rqrr` expects from a photographed symbol.
pub fn to_gray_image(qr: &QrCode, module_sz: u32) -> GrayImage {
    let modules = qr.modules();
    let width = modules.len() as u32;
    let qz_sz = 4 * module_sz;
    let qr_sz = width * module_sz;
    let total_sz = qz_sz + qr_sz + qz_sz;

    let mut canvas = GrayImage::new(total_sz, total_sz);
    for i in 0..total_sz {
        for j in 0..total_sz {
            let in_symbol = (qz_sz..qz_sz + qr_sz).contains(&i) && (qz_sz..qz_sz + qr_sz).contains(&j);
            let pixel = if !in_symbol {
                255
            } else {
                let r = ((i - qz_sz) / module_sz) as usize;
                let c = ((j - qz_sz) / module_sz) as usize;
                if modules[r][c] == 1 {
                    0
                } else {
                    255
                }
            };
            canvas.put_pixel(j, i, Luma([pixel]));
        }
    }
    canvas
}

/// Renders and decodes `qr` with `rqrr`, returning the decoded message.
/// Panics (via `unwrap`) if the symbol doesn't decode, which is exactly
/// what we want from a round-trip test.
pub fn decode_round_trip(qr: &QrCode) -> String {
    let img = to_gray_image(qr, 8);
    let mut prepared = rqrr::PreparedImage::prepare(img);
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one detected grid");
    let (_meta, content) = grids[0].decode().unwrap();
    content
}
