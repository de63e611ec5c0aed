pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    contact::{self, Contact},
    store::ContactStore,
};
pub use crate::errors::{AppError, ValidationError};
pub use crate::storage::{self, ContactStorage, JsonStorage, MemStorage};
