mod clock;
mod student_store;

pub use clock::*;
pub use student_store::*;
