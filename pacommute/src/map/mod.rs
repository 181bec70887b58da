mod county_coordinates;
mod map_ops;
mod map_point;

pub use county_coordinates::{CountyCoordinate, PA_COUNTY_COORDINATES};
pub use map_ops::join_county_coordinates;
pub use map_point::MapPoint;
