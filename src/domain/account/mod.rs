//! Account aggregate
//!
//! Contains the Account record, the caller-supplied DTOs with their
//! validation rules, and the repository interface.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_update;
mod validation;

pub use model::{Account, AccountUpdate, NewAccount};

pub use dto_create::CreateAccountDto;
pub use dto_update::UpdateAccountDto;
pub use validation::{ValidationMode, MAX_FIELD_CHARS};

pub use repository::AccountRepositoryInterface;
