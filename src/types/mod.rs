mod bounding_box;
mod camera;
mod footprint;
mod geo_point;
mod waypoint;

pub use bounding_box::*;
pub use camera::*;
pub use footprint::*;
pub use geo_point::*;
pub use waypoint::*;
