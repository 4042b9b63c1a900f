//! Small math helpers shared by the rig and the zoom strategies.

mod angle;
mod range;

pub use angle::angle_degrees;
pub use range::out_of_range_distance;
