//! Campus graph model: locations plus complete distance and time matrices.

mod campus;
mod matrix;

pub use campus::{CampusGraph, CAMPUS_SCALE};
pub use matrix::CostMatrix;
