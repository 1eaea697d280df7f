pub mod amount_input;
pub mod date_input;
pub mod ui;
