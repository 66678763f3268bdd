pub mod month;
pub mod roster;
