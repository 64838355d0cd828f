//! Foundation module - Core utilities and types
//!
//! - Math types shared by the collision code
//! - Logging setup

pub mod math;
pub mod logging;
