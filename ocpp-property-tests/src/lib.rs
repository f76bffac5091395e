//! Property-based tests for the ocpp-messages codec.
//!
//! Standalone test member using proptest; it does not affect the codec
//! crate itself.
//!
//! # Usage
//!
//! ```bash
//! cargo test -p ocpp-property-tests          # Run all property tests
//! cargo test -p ocpp-property-tests prim     # Only primitive properties
//! PROPTEST_CASES=1000 cargo test -p ocpp-property-tests
//! ```
//!
//! # Test Modules
//!
//! - `prop_primitives`: timestamp and bounded-string invariants
//! - `prop_v16`: round-trip properties for 1.6 messages
//! - `prop_v201`: round-trip properties for 2.0.1 messages

// Re-export for convenience in tests
pub use ocpp_messages::*;
