//! Domain modules for the Mindwell support platform.

pub mod assessment;
pub mod community;
pub mod resources;
pub mod risk;
