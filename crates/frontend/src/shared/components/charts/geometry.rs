//! Pure chart geometry in SVG user units.

use std::f64::consts::PI;

const TAU: f64 = 2.0 * PI;

/// Series colors, cycled by index
pub const PALETTE: [&str; 8] = [
    "#0EA5E9", "#22C55E", "#F59E0B", "#EF4444", "#8B5CF6", "#14B8A6", "#F97316", "#64748B",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: i64,
    pub color: &'static str,
    /// Radians, clockwise from 12 o'clock
    pub start: f64,
    pub end: f64,
    pub path: String,
}

impl Slice {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    pub fn percent(&self) -> f64 {
        self.sweep() / TAU * 100.0
    }
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// Ring sector (`inner == 0.0` gives a pie wedge)
fn sector_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // a single 360° arc collapses to nothing, so full circles are drawn as two halves
    if end - start >= TAU - 1e-9 {
        let mid = start + PI;
        let (ox0, oy0) = polar(cx, cy, outer, start);
        let (ox1, oy1) = polar(cx, cy, outer, mid);
        let mut d = format!(
            "M{:.2},{:.2} A{r},{r} 0 1 1 {:.2},{:.2} A{r},{r} 0 1 1 {:.2},{:.2} Z",
            ox0,
            oy0,
            ox1,
            oy1,
            ox0,
            oy0,
            r = outer
        );
        if inner > 0.0 {
            let (ix0, iy0) = polar(cx, cy, inner, start);
            let (ix1, iy1) = polar(cx, cy, inner, mid);
            d.push_str(&format!(
                " M{:.2},{:.2} A{r},{r} 0 1 0 {:.2},{:.2} A{r},{r} 0 1 0 {:.2},{:.2} Z",
                ix0,
                iy0,
                ix1,
                iy1,
                ix0,
                iy0,
                r = inner
            ));
        }
        return d;
    }

    let large = if end - start > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    if inner > 0.0 {
        let (ix1, iy1) = polar(cx, cy, inner, end);
        let (ix0, iy0) = polar(cx, cy, inner, start);
        format!(
            "M{:.2},{:.2} A{o},{o} 0 {l} 1 {:.2},{:.2} L{:.2},{:.2} A{i},{i} 0 {l} 0 {:.2},{:.2} Z",
            ox0,
            oy0,
            ox1,
            oy1,
            ix1,
            iy1,
            ix0,
            iy0,
            o = outer,
            i = inner,
            l = large
        )
    } else {
        format!(
            "M{:.2},{:.2} L{:.2},{:.2} A{o},{o} 0 {l} 1 {:.2},{:.2} Z",
            cx,
            cy,
            ox0,
            oy0,
            ox1,
            oy1,
            o = outer,
            l = large
        )
    }
}

/// Pie or doughnut slices; non-positive values get no slice and a zero
/// total yields an empty chart
pub fn pie_slices(
    points: &[(String, i64)],
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
) -> Vec<Slice> {
    let total: i64 = points.iter().map(|(_, v)| (*v).max(0)).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut angle = 0.0;
    for (index, (label, value)) in points.iter().enumerate() {
        if *value <= 0 {
            continue;
        }
        let sweep = *value as f64 / total as f64 * TAU;
        let end = angle + sweep;
        slices.push(Slice {
            label: label.clone(),
            value: *value,
            color: palette_color(index),
            start: angle,
            end,
            path: sector_path(cx, cy, outer, inner, angle, end),
        });
        angle = end;
    }
    slices
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: i64,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Vertical bars on a `width × height` plot area; the largest value fills the
/// full height
pub fn bar_layout(points: &[(String, i64)], width: f64, height: f64) -> Vec<Bar> {
    if points.is_empty() {
        return Vec::new();
    }
    let max = points.iter().map(|(_, v)| *v).max().unwrap_or(0).max(0);
    let slot = width / points.len() as f64;
    let bar_width = slot * 0.6;

    points
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let h = if max == 0 {
                0.0
            } else {
                (*value).max(0) as f64 / max as f64 * height
            };
            Bar {
                label: label.clone(),
                value: *value,
                color: palette_color(i),
                x: slot * i as f64 + (slot - bar_width) / 2.0,
                y: height - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}

/// Line vertices spread evenly across `width`, scaled to the largest value
pub fn line_points(values: &[i64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = values.iter().copied().max().unwrap_or(0).max(0);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if values.len() > 1 { step * i as f64 } else { width / 2.0 };
            let y = if max == 0 {
                height
            } else {
                height - (*v).max(0) as f64 / max as f64 * height
            };
            (x, y)
        })
        .collect()
}

/// `points` attribute of a `<polyline>`
pub fn polyline_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(values: &[i64]) -> Vec<(String, i64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("L{}", i), *v))
            .collect()
    }

    #[test]
    fn slices_cover_the_full_circle() {
        let slices = pie_slices(&pts(&[3, 1, 4, 0, 2]), 100.0, 100.0, 90.0, 0.0);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].start, 0.0);
        for pair in slices.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < 1e-12);
        }
        let last = slices.last().unwrap();
        assert!((last.end - TAU).abs() < 1e-9);
        let percent: f64 = slices.iter().map(Slice::percent).sum();
        assert!((percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_gives_no_slices() {
        assert!(pie_slices(&pts(&[0, 0]), 0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(pie_slices(&pts(&[-4]), 0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(pie_slices(&[], 0.0, 0.0, 10.0, 5.0).is_empty());
    }

    #[test]
    fn single_value_is_a_closed_ring() {
        let slices = pie_slices(&pts(&[7]), 50.0, 50.0, 40.0, 20.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path.matches('Z').count(), 2);
    }

    #[test]
    fn bars_scale_to_the_max() {
        let bars = bar_layout(&pts(&[5, 10, 0]), 300.0, 200.0);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[1].height, 200.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 100.0);
        assert_eq!(bars[2].height, 0.0);
        assert!(bars[0].x + bars[0].width <= bars[1].x);
    }

    #[test]
    fn all_zero_bars_are_flat() {
        let bars = bar_layout(&pts(&[0, 0]), 100.0, 50.0);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 50.0));
    }

    #[test]
    fn line_spans_the_width() {
        let points = line_points(&[2, 4, 0], 100.0, 40.0);
        assert_eq!(points, vec![(0.0, 20.0), (50.0, 0.0), (100.0, 40.0)]);
        assert_eq!(polyline_attr(&points[..2]), "0.00,20.00 50.00,0.00");
        assert_eq!(line_points(&[3], 100.0, 40.0), vec![(50.0, 0.0)]);
    }
}
