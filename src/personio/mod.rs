/// Dynamically typed attributes and their typed accessors.
pub mod attribute;
/// Employee records.
pub mod employee;
/// Offset/limit pagination over list endpoints.
pub mod paging;
/// Response envelope unwrapping.
pub mod parse;
/// High-level client for the Personio API.
pub mod serviceclient;
/// Time-off records.
pub mod timeoff;

mod transport;
