pub mod assignments;
pub mod state;
