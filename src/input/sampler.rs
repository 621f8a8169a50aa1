use egui::{Pos2, Vec2};

use crate::geometry::is_finite_pos;

/// One drag sample handed to a tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    /// Current pointer position
    pub point: Pos2,
    /// Movement since the previous sample
    pub delta: Vec2,
}

impl DragEvent {
    pub fn new(point: Pos2, delta: Vec2) -> Self {
        Self { point, delta }
    }
}

/// Smallest spacing a long jump is split into
const MIN_SPLIT_DISTANCE: f32 = 1.0;
/// Most samples a single pointer jump is split into
const MAX_SPLIT_SAMPLES: usize = 1024;

/// Turns raw pointer positions into drag samples.
///
/// A sample is only produced once the pointer has moved at least
/// `min_distance` from the previous sample. With `max_distance` set, a
/// longer jump is split into evenly spaced samples no longer than it.
#[derive(Debug, Clone)]
pub struct DragSampler {
    min_distance: f32,
    max_distance: Option<f32>,
    last_point: Option<Pos2>,
}

impl DragSampler {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            max_distance: None,
            last_point: None,
        }
    }

    /// Split jumps longer than `max_distance`. Non-positive or non-finite
    /// values turn splitting off; tiny values are raised to one unit.
    pub fn with_max_distance(mut self, max_distance: Option<f32>) -> Self {
        self.max_distance = max_distance
            .filter(|max| max.is_finite() && *max > 0.0)
            .map(|max| max.max(MIN_SPLIT_DISTANCE));
        self
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn set_min_distance(&mut self, min_distance: f32) {
        self.min_distance = min_distance;
    }

    pub fn max_distance(&self) -> Option<f32> {
        self.max_distance
    }

    pub fn is_active(&self) -> bool {
        self.last_point.is_some()
    }

    /// Start a drag at `point`
    pub fn begin(&mut self, point: Pos2) {
        self.last_point = is_finite_pos(point).then_some(point);
    }

    /// Feed the current pointer position, getting back the samples it completes
    pub fn sample(&mut self, point: Pos2) -> Vec<DragEvent> {
        let Some(last) = self.last_point else {
            return Vec::new();
        };
        if !is_finite_pos(point) {
            return Vec::new();
        }

        let delta = point - last;
        let distance = delta.length();
        if distance <= 0.0 || distance < self.min_distance.max(0.0) {
            return Vec::new();
        }

        self.last_point = Some(point);
        match self.max_distance {
            Some(max) if distance > max => {
                let count = ((distance / max).ceil() as usize).min(MAX_SPLIT_SAMPLES);
                let step = delta / count as f32;
                (1..=count)
                    .map(|i| {
                        // Land the final sample exactly on the pointer
                        let sample_point = if i == count { point } else { last + step * i as f32 };
                        DragEvent::new(sample_point, step)
                    })
                    .collect()
            }
            _ => vec![DragEvent::new(point, delta)],
        }
    }

    /// End the current drag
    pub fn end(&mut self) {
        self.last_point = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_gated_by_min_distance() {
        let mut sampler = DragSampler::new(10.0);
        sampler.begin(Pos2::new(0.0, 0.0));

        assert!(sampler.sample(Pos2::new(4.0, 0.0)).is_empty());
        assert!(sampler.sample(Pos2::new(9.0, 0.0)).is_empty());

        let events = sampler.sample(Pos2::new(12.0, 0.0));
        assert_eq!(events, vec![DragEvent::new(Pos2::new(12.0, 0.0), Vec2::new(12.0, 0.0))]);

        // Distance is measured from the last delivered sample
        assert!(sampler.sample(Pos2::new(15.0, 0.0)).is_empty());
    }

    #[test]
    fn test_no_samples_outside_a_drag() {
        let mut sampler = DragSampler::new(0.0);
        assert!(sampler.sample(Pos2::new(5.0, 5.0)).is_empty());

        sampler.begin(Pos2::ZERO);
        sampler.end();
        assert!(!sampler.is_active());
        assert!(sampler.sample(Pos2::new(5.0, 5.0)).is_empty());
    }

    #[test]
    fn test_long_jump_is_split_by_max_distance() {
        let mut sampler = DragSampler::new(1.0).with_max_distance(Some(10.0));
        sampler.begin(Pos2::ZERO);

        let events = sampler.sample(Pos2::new(25.0, 0.0));
        assert_eq!(events.len(), 3);
        for event in &events {
            assert!((event.delta.length() - 25.0 / 3.0).abs() < 1e-4);
        }
        assert_eq!(events[2].point, Pos2::new(25.0, 0.0));
    }

    #[test]
    fn test_tiny_max_distance_is_bounded() {
        let sampler = DragSampler::new(1.0).with_max_distance(Some(f32::MIN_POSITIVE));
        assert_eq!(sampler.max_distance(), Some(MIN_SPLIT_DISTANCE));

        let mut sampler = sampler;
        sampler.begin(Pos2::ZERO);
        let events = sampler.sample(Pos2::new(100.0, 0.0));
        assert_eq!(events.len(), 100);
        assert_eq!(events[99].point, Pos2::new(100.0, 0.0));

        // A huge jump is capped rather than allocating one sample per unit
        sampler.begin(Pos2::ZERO);
        let events = sampler.sample(Pos2::new(1.0e9, 0.0));
        assert_eq!(events.len(), MAX_SPLIT_SAMPLES);
        assert_eq!(events[MAX_SPLIT_SAMPLES - 1].point, Pos2::new(1.0e9, 0.0));
    }

    #[test]
    fn test_unusable_max_distance_disables_splitting() {
        for max in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let sampler = DragSampler::new(1.0).with_max_distance(Some(max));
            assert_eq!(sampler.max_distance(), None);
        }
    }
}
