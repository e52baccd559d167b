//! Common building blocks shared by asset identity and amount types

pub mod errors;
pub mod fixed_point;
