pub mod bounds;
pub mod focus;
pub mod overlay;

pub use bounds::{BoundingBox, ClampRegion, bounds_for_geometry, compute_clamp_region, vertices};
pub use focus::{FocusTarget, focus_target};
pub use overlay::{OrientedRectangle, OverlayAligner};
