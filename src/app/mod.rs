pub mod app;
pub mod event;
pub mod mode;
pub mod view;

pub use app::{App, HELP_TEXT};
pub use event::AppEvent;
pub use mode::AppMode;
pub use view::View;
