pub mod feature;
pub mod place;

pub use feature::{Feature, GeoFeature};
pub use place::{Category, Place};
