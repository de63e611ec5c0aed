pub mod contact;
pub mod store;

use crate::errors::AppError;
use crate::storage::ContactStorage;

pub use contact::Contact;
pub use store::ContactStore;
