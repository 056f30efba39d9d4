//! Radar ("spider") chart for a skill profile.
//!
//! Geometry is computed once in polar form (angle in radians, radius in
//! rating units) and then drawn twice: as SVG markup with text labels for
//! inline display, and as a PNG raster for download. The raster carries the
//! geometry only; text is left to the SVG and the accompanying table.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write as _;
use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::models::results::SkillProfile;
use crate::presentation::html::{escape, format_rating};

/// Fixed radial range, independent of the ratings plotted.
pub const RATING_MAX: f64 = 10.0;
pub const GRIDLINES: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];
/// Drawn radius cap. Ratings past it keep their value and label but are
/// drawn at the chart edge.
const DRAW_RADIUS_MAX: f64 = RATING_MAX + 2.0;

/// Label offset (rating units) for axes in the left half of the circle.
const INNER_LABEL_OFFSET: f64 = 0.8;
/// Label offset for axes in the right half.
const OUTER_LABEL_OFFSET: f64 = 1.2;

const SVG_SIZE: f64 = 700.0;
const PNG_SCALE: f64 = 2.0;

const LINE_RGB: [u8; 3] = [0x25, 0x63, 0xEB];
const FILL_RGB: [u8; 3] = [0x60, 0xA5, 0xFA];
const GRID_RGB: [u8; 3] = [0xE5, 0xE7, 0xEB];
const FILL_ALPHA: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub angle: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel {
    pub text: String,
    pub position: PolarPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub title: String,
    pub axes: Vec<Axis>,
    /// Closed outline: `axes.len() + 1` points, the last repeating the first.
    pub polygon: Vec<PolarPoint>,
    pub labels: Vec<ValueLabel>,
}

impl RadarChart {
    pub fn new(profile: &SkillProfile, title: impl Into<String>) -> Self {
        let k = profile.skills.len();
        let angle_of = |i: usize| TAU * i as f64 / k as f64;

        let axes: Vec<Axis> = profile
            .skills
            .iter()
            .enumerate()
            .map(|(i, skill)| Axis {
                label: skill.clone(),
                angle: angle_of(i),
            })
            .collect();

        let mut polygon: Vec<PolarPoint> = profile
            .ratings
            .iter()
            .enumerate()
            .map(|(i, &rating)| PolarPoint {
                angle: angle_of(i),
                radius: rating,
            })
            .collect();
        if let Some(&first) = polygon.first() {
            polygon.push(first);
        }

        let labels = profile
            .ratings
            .iter()
            .enumerate()
            .map(|(i, &rating)| {
                let angle = angle_of(i);
                ValueLabel {
                    text: format_rating(rating),
                    position: PolarPoint {
                        angle,
                        radius: rating + label_offset(angle),
                    },
                }
            })
            .collect();

        Self {
            title: title.into(),
            axes,
            polygon,
            labels,
        }
    }

    pub fn to_svg(&self) -> String {
        let canvas = Canvas::new(1.0);
        let mut svg = String::new();

        let _ = write!(
            svg,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}" font-family="Arial, sans-serif">"##,
            s = SVG_SIZE
        );
        svg.push_str(r##"<rect width="100%" height="100%" fill="#FFFFFF"/>"##);
        let _ = write!(
            svg,
            r##"<text x="{}" y="40" text-anchor="middle" font-size="22" font-weight="bold" fill="#1E3A8A">{}</text>"##,
            SVG_SIZE / 2.0,
            escape(&self.title)
        );

        for level in GRIDLINES {
            let _ = write!(
                svg,
                r##"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="#E5E7EB"/>"##,
                canvas.cx,
                canvas.cy,
                level * canvas.unit
            );
            let (x, y) = canvas.point(PolarPoint {
                angle: FRAC_PI_2 / 4.0,
                radius: level,
            });
            let _ = write!(
                svg,
                r##"<text x="{x:.1}" y="{y:.1}" font-size="11" fill="#4B5563">{level}</text>"##
            );
        }

        for axis in &self.axes {
            let (x, y) = canvas.point(PolarPoint {
                angle: axis.angle,
                radius: RATING_MAX,
            });
            let _ = write!(
                svg,
                r##"<line x1="{:.1}" y1="{:.1}" x2="{x:.1}" y2="{y:.1}" stroke="#E5E7EB"/>"##,
                canvas.cx, canvas.cy
            );
            let (lx, ly) = canvas.point(PolarPoint {
                angle: axis.angle,
                radius: RATING_MAX + 1.0,
            });
            let anchor = match axis.angle.cos() {
                c if c > 0.1 => "start",
                c if c < -0.1 => "end",
                _ => "middle",
            };
            let _ = write!(
                svg,
                r##"<text x="{lx:.1}" y="{ly:.1}" text-anchor="{anchor}" font-size="12" fill="#1F2937">{}</text>"##,
                escape(&axis.label)
            );
        }

        let points = self
            .polygon
            .iter()
            .map(|&p| {
                let (x, y) = canvas.point(p);
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            svg,
            r##"<polygon points="{points}" fill="#60A5FA" fill-opacity="0.25" stroke="#2563EB" stroke-width="2.5"/>"##
        );

        for vertex in self.polygon.iter().take(self.axes.len()) {
            let (x, y) = canvas.point(*vertex);
            let _ = write!(
                svg,
                r##"<circle cx="{x:.1}" cy="{y:.1}" r="4" fill="#2563EB"/>"##
            );
        }

        for label in &self.labels {
            let (x, y) = canvas.point(label.position);
            let _ = write!(
                svg,
                r##"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" dominant-baseline="middle" font-size="11" font-weight="bold" fill="#1E3A8A">{}</text>"##,
                escape(&label.text)
            );
        }

        svg.push_str("</svg>");
        svg
    }

    /// Rasterises the chart geometry and encodes it as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let canvas = Canvas::new(PNG_SCALE);
        let side = (SVG_SIZE * PNG_SCALE) as u32;
        let mut raster = Raster(RgbaImage::from_pixel(side, side, Rgba([255, 255, 255, 255])));
        let stroke = PNG_SCALE;

        for level in GRIDLINES {
            let ring: Vec<(f64, f64)> = (0..=360)
                .map(|deg| {
                    canvas.point(PolarPoint {
                        angle: (deg as f64).to_radians(),
                        radius: level,
                    })
                })
                .collect();
            raster.polyline(&ring, stroke, GRID_RGB);
        }

        for axis in &self.axes {
            let tip = canvas.point(PolarPoint {
                angle: axis.angle,
                radius: RATING_MAX,
            });
            raster.polyline(&[(canvas.cx, canvas.cy), tip], stroke, GRID_RGB);
        }

        let outline: Vec<(f64, f64)> = self.polygon.iter().map(|&p| canvas.point(p)).collect();
        raster.fill_polygon(&outline, FILL_RGB, FILL_ALPHA);
        raster.polyline(&outline, 2.5 * PNG_SCALE, LINE_RGB);
        for &(x, y) in outline.iter().take(self.axes.len()) {
            raster.disc(x, y, 4.0 * PNG_SCALE, LINE_RGB, 1.0);
        }

        let mut out = Cursor::new(Vec::new());
        raster.0.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }
}

/// Labels on the left half (π/2 ≤ θ ≤ 3π/2) sit closer to their vertex so
/// they do not collide with the plotted line.
pub fn label_offset(angle: f64) -> f64 {
    if (FRAC_PI_2..=3.0 * FRAC_PI_2).contains(&angle) {
        INNER_LABEL_OFFSET
    } else {
        OUTER_LABEL_OFFSET
    }
}

/// Maps polar chart coordinates to pixel coordinates (y grows downwards,
/// angle zero points right and increases counter-clockwise).
struct Canvas {
    cx: f64,
    cy: f64,
    unit: f64,
}

impl Canvas {
    fn new(scale: f64) -> Self {
        Self {
            cx: SVG_SIZE / 2.0 * scale,
            cy: (SVG_SIZE / 2.0 + 30.0) * scale,
            unit: 24.0 * scale,
        }
    }

    fn point(&self, p: PolarPoint) -> (f64, f64) {
        let r = p.radius.clamp(0.0, DRAW_RADIUS_MAX) * self.unit;
        (self.cx + r * p.angle.cos(), self.cy - r * p.angle.sin())
    }
}

struct Raster(RgbaImage);

impl Raster {
    fn blend(&mut self, x: i64, y: i64, rgb: [u8; 3], alpha: f32) {
        let (w, h) = self.0.dimensions();
        if x < 0 || y < 0 || x >= i64::from(w) || y >= i64::from(h) {
            return;
        }
        let px = self.0.get_pixel_mut(x as u32, y as u32);
        for (channel, &target) in px.0.iter_mut().zip(rgb.iter()) {
            let mixed = f32::from(*channel) * (1.0 - alpha) + f32::from(target) * alpha;
            *channel = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }

    fn disc(&mut self, x: f64, y: f64, radius: f64, rgb: [u8; 3], alpha: f32) {
        let r = radius.ceil() as i64;
        let (x0, y0) = (x.round() as i64, y.round() as i64);
        for dy in -r..=r {
            for dx in -r..=r {
                if ((dx * dx + dy * dy) as f64) <= radius * radius {
                    self.blend(x0 + dx, y0 + dy, rgb, alpha);
                }
            }
        }
    }

    fn polyline(&mut self, points: &[(f64, f64)], width: f64, rgb: [u8; 3]) {
        for pair in points.windows(2) {
            let ((ax, ay), (bx, by)) = (pair[0], pair[1]);
            let steps = ((bx - ax).hypot(by - ay) * 2.0).ceil().max(1.0) as usize;
            for s in 0..=steps {
                let t = s as f64 / steps as f64;
                self.disc(ax + (bx - ax) * t, ay + (by - ay) * t, width / 2.0, rgb, 1.0);
            }
        }
    }

    /// Even-odd scanline fill of a closed outline.
    fn fill_polygon(&mut self, points: &[(f64, f64)], rgb: [u8; 3], alpha: f32) {
        if points.len() < 3 {
            return;
        }
        let (min_y, max_y) = points
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));

        for row in (min_y.floor() as i64)..=(max_y.ceil() as i64) {
            let yc = row as f64 + 0.5;
            let mut crossings: Vec<f64> = points
                .windows(2)
                .filter_map(|pair| {
                    let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
                    let spans = (y0 <= yc && yc < y1) || (y1 <= yc && yc < y0);
                    spans.then(|| x0 + (yc - y0) * (x1 - x0) / (y1 - y0))
                })
                .collect();
            crossings.sort_by(f64::total_cmp);

            for span in crossings.chunks_exact(2) {
                for col in (span[0].round() as i64)..(span[1].round() as i64) {
                    self.blend(col, row, rgb, alpha);
                }
            }
        }
    }
}
