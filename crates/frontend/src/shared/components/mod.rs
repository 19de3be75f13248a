pub mod table;
pub mod ui;
