//! Procedural terrain profile
//!
//! The ground is a polyline of samples on a fixed sine waveform, evenly spaced
//! in x. It only ever grows to the right as the camera advances.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::ScreenDims;
use crate::consts::*;
use crate::lerp;

/// Append-only ground profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    /// Samples, strictly increasing in x
    samples: Vec<Vec2>,
    /// Horizontal distance between samples
    segment_width: f32,
    /// Ground reference line (screen height)
    baseline: f32,
}

/// Height of the waveform for sample index `i`
#[inline]
pub fn waveform_y(index: usize, baseline: f32) -> f32 {
    baseline - TERRAIN_BASE_OFFSET + (index as f32 * TERRAIN_FREQUENCY).sin() * TERRAIN_AMPLITUDE
}

/// Interpolate the height of segment `a`-`b` at `x`
///
/// `x` outside `[a.x, b.x]` extrapolates along the segment line.
#[inline]
pub fn segment_height_at(a: Vec2, b: Vec2, x: f32) -> f32 {
    debug_assert!(b.x > a.x, "terrain segment has zero or negative width");
    let t = (x - a.x) / (b.x - a.x);
    lerp(a.y, b.y, t)
}

impl Terrain {
    /// Generate the initial profile: `segments + 2` samples, starting one
    /// segment left of the screen so the spawn area is fully covered
    pub fn generate(dims: &ScreenDims) -> Self {
        let segment_width = dims.segment_width();
        let baseline = dims.height;
        let samples = (0..dims.segments + 2)
            .map(|i| {
                Vec2::new(
                    (i as f32 - 1.0) * segment_width,
                    waveform_y(i, baseline),
                )
            })
            .collect();

        Self {
            samples,
            segment_width,
            baseline,
        }
    }

    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    /// Rightmost sample
    pub fn last(&self) -> Vec2 {
        *self
            .samples
            .last()
            .expect("terrain accessed before generation")
    }

    /// Whether the rightmost sample is closer than the lookahead distance to
    /// the visible right edge
    pub fn needs_extension(&self, camera: f32, screen_width: f32) -> bool {
        self.last().x - camera < screen_width * TERRAIN_LOOKAHEAD
    }

    /// Append exactly one sample continuing the waveform
    pub fn extend(&mut self) -> Vec2 {
        let last = self.last();
        let sample = Vec2::new(
            last.x + self.segment_width,
            waveform_y(self.samples.len(), self.baseline),
        );
        self.samples.push(sample);
        sample
    }

    /// Consecutive sample pairs, left to right
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.samples.windows(2).map(|w| (w[0], w[1]))
    }

    /// First segment strictly containing world `x`
    pub fn segment_containing(&self, x: f32) -> Option<(Vec2, Vec2)> {
        self.segments().find(|(a, b)| x > a.x && x < b.x)
    }

    /// Ground height at world `x`, if inside the generated range
    pub fn height_at(&self, x: f32) -> Option<f32> {
        self.segment_containing(x)
            .map(|(a, b)| segment_height_at(a, b, x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> ScreenDims {
        ScreenDims::default()
    }

    #[test]
    fn test_generate_layout() {
        let terrain = Terrain::generate(&dims());
        assert_eq!(terrain.len(), TERRAIN_SEGMENTS + 2);
        assert_eq!(terrain.segment_width(), 40.0);

        let s = terrain.samples();
        assert_eq!(s[0].x, -40.0);
        assert_eq!(s[1].x, 0.0);
        assert_eq!(s[0].y, SCREEN_HEIGHT - 100.0);
        assert!((s[3].y - (SCREEN_HEIGHT - 100.0 + 1.5f32.sin() * 30.0)).abs() < 1e-4);
        assert_eq!(terrain.last().x, SCREEN_WIDTH);
    }

    #[test]
    fn test_extend_appends_one_sample() {
        let mut terrain = Terrain::generate(&dims());
        let before = terrain.len();
        let last = terrain.last();
        assert!(terrain.needs_extension(0.0, SCREEN_WIDTH));

        let added = terrain.extend();
        assert_eq!(terrain.len(), before + 1);
        assert_eq!(added.x, last.x + terrain.segment_width());
        assert_eq!(added.y, waveform_y(before, SCREEN_HEIGHT));
    }

    #[test]
    fn test_no_extension_when_far_enough_ahead() {
        let mut terrain = Terrain::generate(&dims());
        while terrain.needs_extension(0.0, SCREEN_WIDTH) {
            terrain.extend();
        }
        assert!(terrain.last().x >= SCREEN_WIDTH * TERRAIN_LOOKAHEAD);
        // Moving the camera brings the edge back into range
        assert!(terrain.needs_extension(100.0, SCREEN_WIDTH));
    }

    #[test]
    fn test_segment_lookup_is_strict() {
        let terrain = Terrain::generate(&dims());
        // Exactly on a sample: not strictly inside any segment
        assert!(terrain.segment_containing(0.0).is_none());
        assert!(terrain.segment_containing(-40.0).is_none());
        assert!(terrain.segment_containing(-100.0).is_none());

        let (a, b) = terrain.segment_containing(20.0).unwrap();
        assert_eq!(a.x, 0.0);
        assert_eq!(b.x, 40.0);
        let h = terrain.height_at(20.0).unwrap();
        assert!((h - (a.y + b.y) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_segment_height_extrapolates() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 10.0);
        assert_eq!(segment_height_at(a, b, 5.0), 5.0);
        assert_eq!(segment_height_at(a, b, -5.0), -5.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn samples_stay_strictly_increasing(extensions in 0usize..200) {
                let mut terrain = Terrain::generate(&dims());
                for _ in 0..extensions {
                    terrain.extend();
                }
                for (i, (a, b)) in terrain.segments().enumerate() {
                    prop_assert!(b.x > a.x);
                    prop_assert!((b.x - a.x - terrain.segment_width()).abs() < 1e-2);
                    prop_assert!((b.y - waveform_y(i + 1, SCREEN_HEIGHT)).abs() < 1e-4);
                }
            }
        }
    }
}
