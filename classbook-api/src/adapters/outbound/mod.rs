mod clock;
mod json_file;
#[cfg(test)]
mod memory;

pub use clock::*;
pub use json_file::JsonFileStudentStore;
#[cfg(test)]
pub use memory::InMemoryStudentStore;
