pub mod help;
pub mod date_picker;
