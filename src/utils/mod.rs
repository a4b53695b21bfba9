pub mod address_validator;
pub mod time_utils;

pub use time_utils::*;
