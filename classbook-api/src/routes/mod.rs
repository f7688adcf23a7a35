pub(crate) mod error;
pub(crate) mod students;

pub(crate) use error::ApiError;
