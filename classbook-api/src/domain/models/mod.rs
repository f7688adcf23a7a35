mod dates;
mod enrollment;
mod ids;
mod mutation;
mod session;
mod student;

pub use dates::*;
pub use enrollment::*;
pub use ids::*;
pub use mutation::*;
pub use session::*;
pub use student::*;
