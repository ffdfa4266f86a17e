mod proj;

pub use proj::{Crs, Reprojector};
