//! Keyframe tables
//!
//! A table is an ordered list of `(frame, value)` pairs. Sampling between two
//! keys interpolates linearly; sampling outside the key range clamps to the
//! first or last value.

use crate::foundation::math::{utils, Vec3};

/// Values that can be linearly interpolated
pub trait Lerp: Copy {
    /// Interpolate from `self` toward `other` by `t` in `[0, 1]`
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        utils::lerp(*self, *other, t)
    }
}

impl Lerp for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        utils::lerp_vec3(self, other, t)
    }
}

/// One `(frame, value)` sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe<V> {
    /// Frame number, may be fractional
    pub frame: f32,
    /// Value at that frame
    pub value: V,
}

/// Immutable, frame-ordered keyframe table
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTable<V> {
    keys: Vec<Keyframe<V>>,
}

impl<V: Lerp> KeyframeTable<V> {
    /// Build a table from keys that are already sorted by frame
    ///
    /// Returns `None` when `keys` is empty or out of frame order.
    pub fn new(keys: Vec<Keyframe<V>>) -> Option<Self> {
        let sorted = keys.windows(2).all(|pair| pair[0].frame <= pair[1].frame);
        if keys.is_empty() || !sorted {
            return None;
        }
        Some(Self { keys })
    }

    /// Build a table from `count` samples spread uniformly over `fps` frames
    ///
    /// Sample `i` sits at frame `fps * t` with `t = i / (count - 1)` and holds
    /// `value(t)`. Counts below two are raised to two.
    pub fn from_fn(fps: f32, count: usize, mut value: impl FnMut(f32) -> V) -> Self {
        let count = count.max(2);
        let last = (count - 1) as f32;
        let keys = (0..count)
            .map(|i| {
                let t = i as f32 / last;
                Keyframe { frame: fps * t, value: value(t) }
            })
            .collect();
        Self { keys }
    }

    /// Value at `frame`, clamped to the key range
    pub fn sample(&self, frame: f32) -> V {
        let first = &self.keys[0];
        if frame <= first.frame {
            return first.value;
        }
        let last = &self.keys[self.keys.len() - 1];
        if frame >= last.frame {
            return last.value;
        }

        // First key strictly after `frame`; the range checks above keep it in 1..len
        let upper = self.keys.partition_point(|key| key.frame <= frame);
        let a = &self.keys[upper - 1];
        let b = &self.keys[upper];
        let span = b.frame - a.frame;
        if span <= f32::EPSILON {
            return b.value;
        }
        a.value.lerp(&b.value, (frame - a.frame) / span)
    }

    /// Frame of the first key
    pub fn first_frame(&self) -> f32 {
        self.keys[0].frame
    }

    /// Frame of the last key
    pub fn last_frame(&self) -> f32 {
        self.keys[self.keys.len() - 1].frame
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; tables hold at least one key
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The keys in frame order
    pub fn keys(&self) -> &[Keyframe<V>] {
        &self.keys
    }
}
