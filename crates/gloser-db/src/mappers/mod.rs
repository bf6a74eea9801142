//! Entity to model mappers
//!
//! Conversions between domain entities (gloser-core) and database models.
//! Word and verb rows convert infallibly; user rows go through the
//! validating `TryFrom` because username and role are constrained types.

mod training;
mod user;
mod verb;
mod word;
