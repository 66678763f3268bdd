pub mod month_view;
pub mod date_picker;
pub mod theme;
