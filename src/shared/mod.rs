pub mod types;
pub mod utils;
pub mod validations;

pub use types::*;
pub use utils::*;
pub use validations::{
    is_uuid, IdInput, PaginationInput, PaginationRules, Schema, DEFAULT_LIMIT, DEFAULT_PAGE,
    INVALID_ID, MAX_LIMIT,
};
