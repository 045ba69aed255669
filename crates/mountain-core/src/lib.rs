pub mod config;
pub mod constants;
pub mod contour;
pub mod field;
pub mod idle;
pub mod influence;
pub mod particles;
pub mod pixels;
pub mod snapshot;
pub mod surface;
pub mod wave;

pub use config::*;
pub use contour::*;
pub use field::*;
pub use idle::*;
pub use influence::*;
pub use particles::*;
pub use pixels::*;
pub use snapshot::*;
pub use surface::*;
pub use wave::*;
