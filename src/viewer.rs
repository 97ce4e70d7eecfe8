use glam::Mat4;

/// What the animation controller needs from the surrounding viewer.
///
/// The capture and delete requests are edge-triggered: `take_*` returns
/// `true` once per request and clears it. The animation request is a level
/// signal that stays raised until the viewer clears it, typically in response
/// to [`animation_finished`](ViewerHost::animation_finished).
pub trait ViewerHost {
    fn view_transform(&self) -> Mat4;
    fn light_transform(&self) -> Mat4;

    fn set_view_transform(&mut self, view: Mat4);
    fn set_light_transform(&mut self, light: Mat4);

    fn take_keyframe_request(&mut self) -> bool;
    fn take_delete_keyframe_request(&mut self) -> bool;

    fn animation_requested(&self) -> bool;

    /// Playback stopped, completed or was refused.
    fn animation_finished(&mut self);
}

/// Minimal in-memory viewer state.
///
/// Holds the view and light transforms and the pending UI requests. Clears
/// the animation request when told that playback finished.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub view: Mat4,
    pub light: Mat4,
    keyframe_requested: bool,
    delete_requested: bool,
    animation_requested: bool,
    finished_count: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

impl ViewState {
    #[must_use]
    pub fn new(view: Mat4, light: Mat4) -> Self {
        Self {
            view,
            light,
            keyframe_requested: false,
            delete_requested: false,
            animation_requested: false,
            finished_count: 0,
        }
    }

    pub fn request_keyframe(&mut self) {
        self.keyframe_requested = true;
    }

    pub fn request_delete_keyframe(&mut self) {
        self.delete_requested = true;
    }

    pub fn start_animation(&mut self) {
        self.animation_requested = true;
    }

    pub fn stop_animation(&mut self) {
        self.animation_requested = false;
    }

    /// How many times playback has reported finishing.
    #[must_use]
    pub fn finished_count(&self) -> u32 {
        self.finished_count
    }
}

impl ViewerHost for ViewState {
    fn view_transform(&self) -> Mat4 {
        self.view
    }

    fn light_transform(&self) -> Mat4 {
        self.light
    }

    fn set_view_transform(&mut self, view: Mat4) {
        self.view = view;
    }

    fn set_light_transform(&mut self, light: Mat4) {
        self.light = light;
    }

    fn take_keyframe_request(&mut self) -> bool {
        std::mem::take(&mut self.keyframe_requested)
    }

    fn take_delete_keyframe_request(&mut self) -> bool {
        std::mem::take(&mut self.delete_requested)
    }

    fn animation_requested(&self) -> bool {
        self.animation_requested
    }

    fn animation_finished(&mut self) {
        self.animation_requested = false;
        self.finished_count += 1;
    }
}
