use egui::{Painter, Pos2, Shape, Vec2};

use crate::document::Document;
use crate::stroke::{Path, StrokeCap, StrokeStyle};

/// Paints document paths onto an egui canvas
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Canvas origin in screen coordinates
    origin: Vec2,
}

impl Renderer {
    pub fn new(origin: Vec2) -> Self {
        Self { origin }
    }

    pub fn render(&self, painter: &Painter, document: &Document) {
        for path in document.paths() {
            self.render_path(painter, path);
        }
    }

    fn render_path(&self, painter: &Painter, path: &Path) {
        let style = path.style();
        let points: Vec<Pos2> = capped_points(path.points(), style)
            .into_iter()
            .map(|p| p + self.origin)
            .collect();

        let radius = style.width / 2.0;
        match points.len() {
            0 => {}
            1 => {
                // A lone point is only visible with a round cap
                if style.cap == StrokeCap::Round {
                    painter.circle_filled(points[0], radius, style.color);
                }
            }
            n => {
                if style.cap == StrokeCap::Round {
                    painter.circle_filled(points[0], radius, style.color);
                    painter.circle_filled(points[n - 1], radius, style.color);
                }
                painter.add(Shape::line(points, egui::Stroke::new(style.width, style.color)));
            }
        }
    }
}

/// The polyline actually stroked: square caps push both end points outwards
/// by half the stroke width, other caps leave the points as they are.
pub fn capped_points(points: &[Pos2], style: &StrokeStyle) -> Vec<Pos2> {
    let mut capped = points.to_vec();
    if style.cap != StrokeCap::Square || points.len() < 2 {
        return capped;
    }

    let half = style.width / 2.0;
    let n = points.len();
    let start_dir = (points[0] - points[1]).normalized();
    let end_dir = (points[n - 1] - points[n - 2]).normalized();
    if start_dir.is_finite() {
        capped[0] += start_dir * half;
    }
    if end_dir.is_finite() {
        capped[n - 1] += end_dir * half;
    }
    capped
}
