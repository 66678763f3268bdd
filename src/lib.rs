pub mod schedule;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;

pub use schedule::{color_for, resolve, Roster, Rotation, PERIOD_DAYS};
pub use ui::month_view::{build, CalendarCell, YearMonth};
pub use app::{AppState, Mode};
