//! Icon rasterization
//!
//! Draws the circle outline and checkmark with tiny-skia and hands the result
//! back as an `image::RgbaImage`.

use image::RgbaImage;

use super::IconError;

/// Name of the drawing capability the renderer depends on
pub const RASTER_BACKEND: &str = "tiny-skia raster backend";

/// Render the icon at `size`×`size` pixels
#[cfg(feature = "render")]
pub fn render_icon(size: u32) -> Result<RgbaImage, IconError> {
    use tiny_skia::{
        Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
    };

    use super::{IconColor, IconGeometry};

    let mut pixmap = Pixmap::new(size, size).ok_or(IconError::InvalidSize(size))?;
    let geometry = IconGeometry::for_size(size);

    let (r, g, b, a) = IconColor::Background.rgba();
    pixmap.fill(Color::from_rgba8(r, g, b, a));

    let paint_for = |color: IconColor| {
        let (r, g, b, a) = color.rgba();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        paint
    };

    // Circle border
    let border = geometry
        .border_bounds()
        .and_then(|(left, top, right, bottom)| Rect::from_ltrb(left, top, right, bottom))
        .and_then(PathBuilder::from_oval);
    match border {
        Some(path) => {
            let stroke = Stroke {
                width: geometry.border_width as f32,
                ..Stroke::default()
            };
            pixmap.stroke_path(
                &path,
                &paint_for(IconColor::Border),
                &stroke,
                Transform::identity(),
                None,
            );
        }
        None => tracing::debug!(size, "canvas too small for border, skipping"),
    }

    // Checkmark; integer vertices address pixel centers
    let check = {
        let mut pb = PathBuilder::new();
        let [first, rest @ ..] = geometry.check_points;
        pb.move_to(first.0 as f32 + 0.5, first.1 as f32 + 0.5);
        for (x, y) in rest {
            pb.line_to(x as f32 + 0.5, y as f32 + 0.5);
        }
        pb.finish()
    };
    match check {
        Some(path) => {
            let stroke = Stroke {
                width: geometry.check_width as f32,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Stroke::default()
            };
            pixmap.stroke_path(
                &path,
                &paint_for(IconColor::Check),
                &stroke,
                Transform::identity(),
                None,
            );
        }
        None => tracing::debug!(size, "checkmark collapsed, skipping"),
    }

    tracing::debug!(
        size,
        scale = geometry.scale,
        border_width = geometry.border_width,
        check_extent = ?geometry.check_extent(),
        check_width = geometry.check_width,
        "rendered icon"
    );

    // tiny-skia stores premultiplied color
    let mut image = RgbaImage::new(size, size);
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok(image)
}

/// Render the icon at `size`×`size` pixels
#[cfg(not(feature = "render"))]
pub fn render_icon(size: u32) -> Result<RgbaImage, IconError> {
    tracing::debug!(size, "raster backend compiled out");
    Err(IconError::MissingCapability {
        capability: RASTER_BACKEND,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "render")]
    mod rendered {
        use super::*;
        use crate::icon::IconColor;

        const SIZES: [u32; 4] = [16, 32, 48, 128];

        fn is_white(p: &image::Rgba<u8>) -> bool {
            p.0 == [255, 255, 255, 255]
        }

        fn is_check_green(p: &image::Rgba<u8>) -> bool {
            let [r, g, b, a] = p.0;
            a == 255 && g > r.saturating_add(100) && g > b.saturating_add(50)
        }

        #[test]
        fn test_dimensions_match_size() {
            for size in SIZES {
                let image = render_icon(size).unwrap();
                assert_eq!(image.width(), size);
                assert_eq!(image.height(), size);
            }
        }

        #[test]
        fn test_corners_are_white() {
            for size in SIZES {
                let image = render_icon(size).unwrap();
                let last = size - 1;
                for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                    assert!(is_white(image.get_pixel(x, y)), "corner ({x}, {y}) at {size}px");
                }
            }
        }

        #[test]
        fn test_center_region_has_checkmark() {
            for size in SIZES {
                let image = render_icon(size).unwrap();
                let (lo, hi) = (size * 3 / 8, size * 5 / 8);
                let found = (lo..=hi)
                    .flat_map(|y| (lo..=hi).map(move |x| (x, y)))
                    .any(|(x, y)| is_check_green(image.get_pixel(x, y)));
                assert!(found, "no checkmark near center at {size}px");
            }
        }

        #[test]
        fn test_check_vertex_is_green() {
            for size in SIZES {
                let image = render_icon(size).unwrap();
                let geometry = crate::icon::IconGeometry::for_size(size);
                let (x, y) = geometry.check_points[1];
                assert!(is_check_green(image.get_pixel(x as u32, y as u32)));
            }
        }

        #[test]
        fn test_fully_opaque() {
            for size in SIZES {
                let image = render_icon(size).unwrap();
                assert!(image.pixels().all(|p| p.0[3] == 255));
            }
        }

        #[test]
        fn test_border_drawn_at_top_center() {
            let image = render_icon(128).unwrap();
            // Ring spans y = 1..3 at the top of the 128px icon
            let [r, g, b, a] = image.get_pixel(64, 2).0;
            let (gray, _, _, _) = IconColor::Border.rgba();
            assert_eq!(a, 255);
            assert!(r == g && g == b);
            assert!(r.abs_diff(gray) <= 8);
            assert!(is_white(image.get_pixel(64, 0)));
        }

        #[test]
        fn test_render_is_deterministic() {
            assert_eq!(render_icon(48).unwrap(), render_icon(48).unwrap());
        }

        #[test]
        fn test_zero_size_rejected() {
            assert!(matches!(render_icon(0), Err(IconError::InvalidSize(0))));
        }

        #[test]
        fn test_tiny_sizes_render() {
            for size in 1..8 {
                let image = render_icon(size).unwrap();
                assert_eq!(image.dimensions(), (size, size));
            }
        }
    }

    #[cfg(not(feature = "render"))]
    #[test]
    fn test_missing_backend() {
        match render_icon(16) {
            Err(IconError::MissingCapability { capability }) => {
                assert_eq!(capability, RASTER_BACKEND)
            }
            other => panic!("unexpected result: {:?}", other.map(|i| i.dimensions())),
        }
    }
}
