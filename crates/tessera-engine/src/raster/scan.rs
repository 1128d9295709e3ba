use crate::coords::IRect;
use crate::geometry::FixedTriangle;
use crate::paint::Color;

use super::ColorRule;

/// Scan-converts `tri`, calling `plot(x, y, color)` once per covered pixel.
///
/// Coverage: pixel `(x, y)` is sampled at its top-left corner on the
/// fixed-point grid and is covered when all three tie-biased edge values are
/// positive. Edge values are stepped incrementally across the pixel range.
///
/// Returns the number of pixels plotted.
pub fn rasterize<R, F>(tri: &FixedTriangle, rule: &R, plot: F) -> usize
where
    R: ColorRule + ?Sized,
    F: FnMut(i32, i32, Color),
{
    rasterize_region(tri, tri.pixel_bounds(), rule, plot)
}

/// Like [`rasterize`], restricted to the pixels of `region`.
///
/// Coverage inside `region` is identical to the unrestricted scan.
pub fn rasterize_region<R, F>(tri: &FixedTriangle, region: IRect, rule: &R, mut plot: F) -> usize
where
    R: ColorRule + ?Sized,
    F: FnMut(i32, i32, Color),
{
    let Some(area) = tri.pixel_bounds().intersect(region) else {
        return 0;
    };
    let edges = tri.edges();
    let step_x = edges.map(|e| e.step_x());
    let step_y = edges.map(|e| e.step_y());

    let mut row = edges.map(|e| e.biased_at_pixel(area.x, area.y));
    let mut plotted = 0;

    for py in area.y..area.bottom() {
        let mut w = row;
        for px in area.x..area.right() {
            if w[0] > 0 && w[1] > 0 && w[2] > 0 {
                plot(px, py, rule.color_at(px, py));
                plotted += 1;
            }
            for (value, step) in w.iter_mut().zip(step_x) {
                *value += step;
            }
        }
        for (value, step) in row.iter_mut().zip(step_y) {
            *value += step;
        }
    }

    plotted
}
