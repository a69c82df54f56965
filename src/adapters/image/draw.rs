//! Bounding-box drawing

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::core::models::Annotation;

/// Outline colour of a flagged box
pub const FLAGGED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Outline colour of an unflagged box
pub const UNFLAGGED: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Outline thickness in pixels, drawn inwards
pub const OUTLINE_WIDTH: i32 = 3;

/// Colour used for an annotation's outline
#[must_use]
pub const fn outline_color(annotation: &Annotation) -> Rgba<u8> {
    if annotation.is_flagged() { FLAGGED } else { UNFLAGGED }
}

/// Draw every annotation's outline onto `image`
///
/// Corners are clamped to just outside the image, so sides beyond the edge
/// stay invisible. Boxes entirely outside the image are skipped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn draw_annotations(image: &mut RgbaImage, annotations: &[Annotation]) {
    let margin = i64::from(OUTLINE_WIDTH);
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));
    let clamp = |v: f64, max: i64| (v.round() as i64).clamp(-margin, max + margin);

    for annotation in annotations {
        let (x0, y0, x1, y1) = annotation.corners();
        let (x0, x1) = (clamp(x0, width), clamp(x1, width));
        let (y0, y1) = (clamp(y0, height), clamp(y1, height));
        if x1 < 0 || y1 < 0 || x0 >= width || y0 >= height {
            continue;
        }
        let color = outline_color(annotation);

        for inset in 0..margin {
            let w = x1 - x0 + 1 - 2 * inset;
            let h = y1 - y0 + 1 - 2 * inset;
            if w <= 0 || h <= 0 {
                break;
            }
            let rect =
                Rect::at((x0 + inset) as i32, (y0 + inset) as i32).of_size(w as u32, h as u32);
            draw_hollow_rect_mut(image, rect, color);
        }
    }
}
