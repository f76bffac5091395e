//! Message types for OCPP 1.6, the flat-field protocol generation.
//!
//! This namespace and [`crate::v201`] are disjoint type universes; a
//! message from one must never be validated against the other's wire
//! schema. Only the primitive value types are shared.

pub mod enums;
pub mod messages;
pub mod types;

pub use enums::*;
pub use messages::*;
pub use types::*;
