use egui::{Color32, Pos2};

/// How the open ends of a path are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeCap {
    /// Ends exactly at the end point
    #[default]
    Butt,
    /// Half-disc around each end point
    Round,
    /// Extends past each end point by half the stroke width
    Square,
}

/// Stroke appearance applied to a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
    pub cap: StrokeCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: 1.0,
            cap: StrokeCap::Butt,
        }
    }
}

impl StrokeStyle {
    pub fn new(color: Color32, width: f32, cap: StrokeCap) -> Self {
        Self { color, width, cap }
    }
}

/// An open polyline with a stroke style
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Pos2>,
    style: StrokeStyle,
}

impl Path {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            points: Vec::new(),
            style,
        }
    }

    /// A straight two-point segment
    pub fn line(from: Pos2, to: Pos2, style: StrokeStyle) -> Self {
        Self {
            points: vec![from, to],
            style,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sum of the segment lengths
    pub fn length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}
