#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod appendage;
pub mod body;
pub mod errors;
pub mod frame;
pub mod geometry;

pub use appendage::catalog::{AppendageTexture, AppendageType};
pub use appendage::palette::{AppendageColor, ColorPalette};
pub use appendage::{Appendage, AppendageBuilder};
pub use body::mount::MountPoint;
pub use body::segment::{BodySegment, HumanoidModel};
pub use errors::{AppendageError, Result};
pub use frame::{Axis, FrameOp, FrameStack};
pub use geometry::{BOX_UNITS_PER_MODEL_UNIT, BoundingBox};
