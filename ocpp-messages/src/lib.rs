//! Typed message codec for OCPP 1.6 and OCPP 2.0.1.
//!
//! Converts between wire-format JSON payloads and strongly-typed message
//! structs for the two protocol generations, enforcing bounded identifier
//! strings, closed enumerations, RFC 3339 timestamp fidelity and exact
//! required/optional field semantics.
//!
//! The crate is a pure, stateless transformation layer: no I/O, no RPC
//! framing, no call-id correlation. Encoding and decoding are synchronous
//! and safe to run from any number of threads concurrently. [`v16`] and
//! [`v201`] are disjoint type universes; only the primitive value types
//! in [`cistring`], [`datetime`] and [`types`] are shared between them.
//!
//! ```
//! use ocpp_messages::{from_wire, to_wire};
//! use ocpp_messages::v201::messages::ClearDisplayMessageRequest;
//!
//! let wire = serde_json::json!({"id": 17});
//! let request: ClearDisplayMessageRequest = from_wire(wire.clone()).unwrap();
//! assert_eq!(to_wire(&request).unwrap(), wire);
//! ```

pub mod cistring;
pub mod codec;
pub mod datetime;
pub mod error;
pub mod types;
pub mod v16;
pub mod v201;

mod macros;

pub use cistring::CiString;
pub use codec::{from_wire, to_wire, Message};
pub use datetime::DateTime;
pub use error::{
    DecodeError, EncodeError, LengthViolation, TimestampParseError, UnknownEnumerator,
};
