//! Service layer: generic record operations on top of `models`.
//! - One [`records::RecordService`] per table, all sharing one implementation.
//! - Reference checks live in [`integrity`], demo data in [`seed`].

pub mod errors;
pub mod integrity;
pub mod records;
pub mod seed;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use records::RecordService;
