//! Cube-sphere geometry: the six face directions, face coordinates, cube-to-sphere
//! projection, and triangle winding checks.

mod direction;
mod face_coord;
mod projection;
mod winding;

pub use direction::{Direction, ParseDirectionError};
pub use face_coord::FaceCoord;
pub use projection::{face_coord_to_cube_point, face_coord_to_sphere};
pub use winding::{triangle_normal, triangle_winds_outward};
