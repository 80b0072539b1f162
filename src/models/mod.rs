//! REST payload data contracts
//!
//! Inert request/response shapes consumed by the rendered application layer.
//! No executable logic lives here; field names follow the wire format of the
//! backing cluster APIs, preserved with serde renames where they are not
//! valid Rust identifiers.

pub mod channels;
pub mod explain;
pub mod indices;
pub mod policy;
pub mod rollup;
pub mod transform;
