//! Domain value objects and types.
//!
//! Type-safe wrappers for the contact fields that carry format rules.
//! Each one validates at construction time, so an invalid phone number or
//! birth date can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::BirthDate;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
