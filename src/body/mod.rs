//! Humanoid body segments and their mount-point catalogs.
//!
//! - `segment`: the six fixed body segments and the host-model seam
//! - `mount`: the per-segment anchor catalog and its transform derivation

pub mod mount;
pub mod segment;

pub use mount::MountPoint;
pub use segment::{BodySegment, HumanoidModel};
