pub mod countdown;
pub mod header;
pub mod monthly;
pub mod statusbar;
pub mod today;
