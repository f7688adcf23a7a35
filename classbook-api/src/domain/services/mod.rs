mod roster;

pub use roster::RosterServiceImpl;
