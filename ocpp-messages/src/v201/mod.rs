//! Message types for OCPP 2.0.1, the structured protocol generation.
//!
//! This namespace and [`crate::v16`] are disjoint type universes; a
//! message from one must never be validated against the other's wire
//! schema. Only the primitive value types are shared.

pub mod enums;
pub mod messages;
pub mod types;

pub use enums::*;
pub use messages::*;
pub use types::*;
