pub mod command;
pub mod config;
pub mod contact;
pub mod error;
pub mod state;
pub mod store;
pub mod ui;
pub mod utils;
pub mod validation;

pub use contact::{Contact, ContactId};
pub use error::StoreError;
pub use store::ContactStore;
pub use validation::{Field, ValidationError, ValidationKind};
