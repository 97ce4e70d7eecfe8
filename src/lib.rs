#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod animation;
pub mod errors;
pub mod scene;
pub mod settings;
pub mod viewer;

pub use animation::{AnimationController, AnimationFrame, Keyframe, KeyframeSequence, PlaybackState};
pub use errors::{Result, ViewerError};
pub use scene::{Group, Model, Vertex, VertexBuffer};
pub use settings::AnimationSettings;
pub use viewer::{ViewState, ViewerHost};
