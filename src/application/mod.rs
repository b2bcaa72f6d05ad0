//! Application layer - use cases over the domain

pub mod accounts;

pub use accounts::AccountService;
