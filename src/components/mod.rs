//! UI Components
//!
//! Navigation components for the portal shell.

mod side_nav;
mod recent_menu_bar;
mod alert_dialog;

pub use side_nav::SideNav;
pub use recent_menu_bar::RecentMenuBar;
pub use alert_dialog::AlertDialog;
