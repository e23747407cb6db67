//! Asset resolution and encoding.

pub mod encode;
pub mod mime;
pub mod resolve;
