//! Application services
//!
//! Context objects owned by the scene driver and passed explicitly to
//! whatever needs them. There are no global instances.

pub mod notification;
pub mod resources;

pub use notification::{NotificationService, Severity};
pub use resources::{ResourceManager, TextureError};
