//! Icon geometry
//!
//! All shapes are laid out on a 128-unit reference canvas and scaled to the
//! requested pixel size.

/// Edge length of the reference canvas the checkmark coordinates are given in
const REFERENCE_SIZE: f32 = 128.0;

/// Gap between the canvas edge and the circle border, in pixels
const BORDER_MARGIN: f32 = 1.0;

/// Checkmark vertices on the reference canvas: left tip, bottom, right tip
const CHECK_POINTS: [(f32, f32); 3] = [(35.0, 64.0), (55.0, 84.0), (93.0, 46.0)];

/// Colors used by the icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconColor {
    /// Canvas fill - white
    Background,
    /// Circle outline - light gray
    Border,
    /// Checkmark - green (#22C55E)
    Check,
}

impl IconColor {
    /// Get RGBA color
    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        match self {
            IconColor::Background => (255, 255, 255, 255),
            IconColor::Border => (224, 224, 224, 255),
            IconColor::Check => (34, 197, 94, 255),
        }
    }
}

/// Drawing parameters for one icon size
#[derive(Debug, Clone, PartialEq)]
pub struct IconGeometry {
    /// Canvas edge length in pixels
    pub size: u32,
    /// `size / 128`
    pub scale: f32,
    /// Circle outline thickness in pixels
    pub border_width: u32,
    /// Checkmark stroke thickness in pixels
    pub check_width: u32,
    /// Checkmark vertices in pixel coordinates, truncated toward zero
    pub check_points: [(i32, i32); 3],
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        let scale = size as f32 / REFERENCE_SIZE;
        let check_points =
            CHECK_POINTS.map(|(x, y)| ((x * scale) as i32, (y * scale) as i32));

        Self {
            size,
            scale,
            border_width: (size as f32 / 64.0).round().max(1.0) as u32,
            check_width: (size as f32 / 10.0).round().max(2.0) as u32,
            check_points,
        }
    }

    /// Centerline of the circle outline as `(left, top, right, bottom)`.
    ///
    /// The outer edge of the stroke touches the margin-inset square, so the
    /// whole ring stays inside it. Returns `None` when the canvas is too small
    /// to hold a ring.
    pub fn border_bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let inset = BORDER_MARGIN + self.border_width as f32 / 2.0;
        let far = self.size as f32 - inset;
        (far > inset).then_some((inset, inset, far, far))
    }

    /// Width and height of the box spanned by the checkmark vertices
    pub fn check_extent(&self) -> (u32, u32) {
        let xs = self.check_points.map(|(x, _)| x);
        let ys = self.check_points.map(|(_, y)| y);
        let span = |v: [i32; 3]| {
            let min = v.iter().min().copied().unwrap_or(0);
            let max = v.iter().max().copied().unwrap_or(0);
            (max - min) as u32
        };
        (span(xs), span(ys))
    }
}
