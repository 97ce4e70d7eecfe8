/// One of the three playback segments between four keyframes.
///
/// The first and last segments repeat their boundary keyframe so that every
/// segment has four spline controls and the path starts and ends exactly on
/// the first and last keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Keyframe 0 → 1, controls `(0, 0, 1, 2)`.
    LeadIn,
    /// Keyframe 1 → 2, controls `(0, 1, 2, 3)`.
    Middle,
    /// Keyframe 2 → 3, controls `(1, 2, 3, 3)`.
    LeadOut,
}

/// Phase value at which the last segment ends.
pub const PHASE_END: f32 = 3.0;

impl Segment {
    /// Maps a global phase onto a segment and its local parameter.
    ///
    /// Boundaries belong to the earlier segment: a phase of exactly `1.0` is
    /// the end of [`Segment::LeadIn`]. Returns `None` outside `[0, 3]`.
    #[must_use]
    pub fn locate(phase: f32) -> Option<(Self, f32)> {
        if !(0.0..=PHASE_END).contains(&phase) {
            return None;
        }

        Some(if phase <= 1.0 {
            (Self::LeadIn, phase)
        } else if phase <= 2.0 {
            (Self::Middle, phase - 1.0)
        } else {
            (Self::LeadOut, phase - 2.0)
        })
    }

    /// Keyframe indices used as the four spline controls.
    #[must_use]
    pub const fn control_indices(self) -> [usize; 4] {
        match self {
            Self::LeadIn => [0, 0, 1, 2],
            Self::Middle => [0, 1, 2, 3],
            Self::LeadOut => [1, 2, 3, 3],
        }
    }
}
