use glam::Mat4;
use smallvec::SmallVec;

/// Number of keyframes a sequence holds, and the exact count playback needs.
pub const MAX_KEYFRAMES: usize = 4;

/// A captured snapshot of the exploded view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub explosion: f32,
    pub view: Mat4,
    pub light: Mat4,
}

impl Keyframe {
    #[must_use]
    pub fn new(explosion: f32, view: Mat4, light: Mat4) -> Self {
        Self {
            explosion,
            view,
            light,
        }
    }
}

/// Bounded undo-style stack of keyframes.
///
/// Samples are only ever pushed to and popped from the tail. Pushing onto a
/// full sequence and popping from an empty one are both no-ops.
#[derive(Debug, Clone, Default)]
pub struct KeyframeSequence {
    frames: SmallVec<[Keyframe; MAX_KEYFRAMES]>,
}

impl KeyframeSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a keyframe. Returns `false` when the sequence was already full.
    pub fn capture(&mut self, explosion: f32, view: Mat4, light: Mat4) -> bool {
        if self.is_full() {
            return false;
        }
        self.frames.push(Keyframe::new(explosion, view, light));
        true
    }

    /// Removes the most recently captured keyframe, if any.
    pub fn delete_last(&mut self) -> Option<Keyframe> {
        self.frames.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.frames.len() >= MAX_KEYFRAMES
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Keyframe> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyframe> {
        self.frames.iter()
    }

    /// Looks up four keyframes by index, e.g. the controls of a segment.
    #[must_use]
    pub fn select(&self, indices: [usize; 4]) -> Option<[&Keyframe; 4]> {
        Some([
            self.get(indices[0])?,
            self.get(indices[1])?,
            self.get(indices[2])?,
            self.get(indices[3])?,
        ])
    }
}
