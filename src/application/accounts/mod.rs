//! Account use-cases

pub mod service;

pub use service::AccountService;
