//! Backend services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`upload`] - PDF upload to the extraction backend
//! - [`health`] - Backend health probe

pub mod upload;
pub mod health;

pub use upload::*;
pub use health::*;
