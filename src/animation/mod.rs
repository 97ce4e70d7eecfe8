pub mod values;
pub mod decompose;
pub mod transform;
pub mod keyframes;
pub mod segment;
pub mod controller;

pub use values::{
    CatmullRom, catmull_rom_interpolate_list, catmull_rom_matrix, catmull_rom_quaternion,
    catmull_rom_scalar, catmull_rom_vector, slerp,
};
pub use decompose::{Decomposed, decompose};
pub use transform::interpolate_transform;
pub use keyframes::{Keyframe, KeyframeSequence, MAX_KEYFRAMES};
pub use segment::Segment;
pub use controller::{AnimationController, AnimationFrame, PlaybackState};
