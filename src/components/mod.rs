pub mod messages;
pub mod ui;
