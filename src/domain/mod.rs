//! Domain layer - account entity, inputs and the persistence seam

pub mod account;

pub use account::{
    Account, AccountRepositoryInterface, AccountUpdate, CreateAccountDto, NewAccount,
    UpdateAccountDto, ValidationMode,
};
pub use crate::shared::{AccountError, AccountResult};
