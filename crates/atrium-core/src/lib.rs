pub mod camera;
pub mod constants;
pub mod driver;
pub mod easing;
pub mod path;
pub mod scene;
pub mod scroll;
pub mod sections;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use driver::*;
pub use easing::*;
pub use path::*;
pub use scene::*;
pub use scroll::*;
pub use sections::*;
