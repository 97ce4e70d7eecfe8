use glam::Mat4;
use log::{debug, info, warn};

use crate::animation::keyframes::{KeyframeSequence, MAX_KEYFRAMES};
use crate::animation::segment::{PHASE_END, Segment};
use crate::animation::transform::interpolate_transform;
use crate::animation::values::catmull_rom_scalar;
use crate::errors::{Result, ViewerError};
use crate::scene::Model;
use crate::settings::AnimationSettings;
use crate::viewer::ViewerHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    /// Playback completed or was refused; waiting for the request to clear.
    Done,
}

/// Interpolated values for one playback phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub explosion: f32,
    pub view: Mat4,
    pub light: Mat4,
}

/// Owns the keyframes, playback phase and explosion amount of one viewer
/// session, and drives them once per displayed frame via [`tick`](Self::tick).
#[derive(Debug, Clone, Default)]
pub struct AnimationController {
    keyframes: KeyframeSequence,
    settings: AnimationSettings,
    state: PlaybackState,
    /// Frames emitted since playback started; the phase is derived from it.
    frame: u32,
    phase: f32,
    explosion: f32,
}

impl AnimationController {
    /// Creates a controller with no keyframes, rejecting settings that fail
    /// [`AnimationSettings::validate`].
    pub fn new(settings: AnimationSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            ..Default::default()
        })
    }

    #[must_use]
    pub fn keyframes(&self) -> &KeyframeSequence {
        &self.keyframes
    }

    #[must_use]
    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[must_use]
    pub fn explosion(&self) -> f32 {
        self.explosion
    }

    /// Captures the current explosion amount with the given transforms.
    /// Returns `false` when the sequence is already full.
    pub fn capture_keyframe(&mut self, view: Mat4, light: Mat4) -> bool {
        if !self.keyframes.capture(self.explosion, view, light) {
            return false;
        }
        info!("Keyframes: {}", self.keyframes.len());
        true
    }

    /// Drops the most recent keyframe. Returns `false` when there was none.
    pub fn delete_keyframe(&mut self) -> bool {
        if self.keyframes.delete_last().is_none() {
            return false;
        }
        info!("Keyframes: {}", self.keyframes.len());
        true
    }

    /// Evaluates the keyframe path at `phase` without touching any state.
    ///
    /// Returns `None` unless all keyframes are captured and `phase` lies in
    /// `[0, 3]`.
    #[must_use]
    pub fn sample(&self, phase: f32) -> Option<AnimationFrame> {
        if !self.keyframes.is_full() {
            return None;
        }
        let (segment, t) = Segment::locate(phase)?;
        let [k0, k1, k2, k3] = self.keyframes.select(segment.control_indices())?;

        Some(AnimationFrame {
            explosion: catmull_rom_scalar(t, k0.explosion, k1.explosion, k2.explosion, k3.explosion),
            view: interpolate_transform(t, &k0.view, &k1.view, &k2.view, &k3.view),
            light: interpolate_transform(t, &k0.light, &k1.light, &k2.light, &k3.light),
        })
    }

    /// Manual explosion override, e.g. from a slider.
    ///
    /// The amount is clamped to the configured range. Ignored while playing;
    /// returns whether the model was updated.
    pub fn set_explosion(&mut self, amount: f32, model: &mut Model) -> bool {
        if self.state == PlaybackState::Playing {
            return false;
        }
        self.apply_explosion(self.settings.clamp_explosion(amount), model);
        true
    }

    /// Single path through which both playback and the slider move vertices.
    fn apply_explosion(&mut self, amount: f32, model: &mut Model) {
        self.explosion = amount;
        model.explode(amount);
    }

    /// Runs one frame of keyframe editing and playback.
    pub fn tick<H: ViewerHost + ?Sized>(&mut self, host: &mut H, model: &mut Model) -> PlaybackState {
        // 1. Keyframe editing requests
        if host.take_keyframe_request() {
            self.capture_keyframe(host.view_transform(), host.light_transform());
        }
        if host.take_delete_keyframe_request() {
            self.delete_keyframe();
        }

        // 2. Request cleared: back to idle
        if !host.animation_requested() {
            if self.state == PlaybackState::Playing {
                debug!("Animation stopped at phase {:.3}", self.phase);
                host.animation_finished();
            }
            self.state = PlaybackState::Idle;
            self.rewind();
            return self.state;
        }

        // 3. Request raised: start or continue
        match self.state {
            PlaybackState::Idle => match self.start() {
                Ok(()) => self.advance(host, model),
                Err(err) => {
                    warn!("{err}, create more keyframes");
                    self.finish(host);
                }
            },
            PlaybackState::Playing => self.advance(host, model),
            PlaybackState::Done => {}
        }

        self.state
    }

    fn start(&mut self) -> Result<()> {
        if !self.keyframes.is_full() {
            return Err(ViewerError::InsufficientKeyframes {
                count: self.keyframes.len(),
                required: MAX_KEYFRAMES,
            });
        }
        debug!("Animation started");
        self.rewind();
        self.state = PlaybackState::Playing;
        Ok(())
    }

    fn advance<H: ViewerHost + ?Sized>(&mut self, host: &mut H, model: &mut Model) {
        let Some(frame) = self.sample(self.phase) else {
            debug!("Animation completed");
            self.finish(host);
            return;
        };

        self.apply_explosion(frame.explosion, model);
        host.set_light_transform(frame.light);
        host.set_view_transform(frame.view);

        self.frame += 1;
        self.phase = self.phase_at(self.frame);
    }

    /// Phase of the `frame`th emitted frame, snapped onto the end of the path
    /// within half a step of it.
    fn phase_at(&self, frame: u32) -> f32 {
        let step = self.settings.phase_step;
        let phase = frame as f32 * step;
        if (PHASE_END - phase).abs() <= step * 0.5 {
            PHASE_END
        } else {
            phase
        }
    }

    fn rewind(&mut self) {
        self.frame = 0;
        self.phase = 0.0;
    }

    fn finish<H: ViewerHost + ?Sized>(&mut self, host: &mut H) {
        self.state = PlaybackState::Done;
        self.rewind();
        host.animation_finished();
    }
}
