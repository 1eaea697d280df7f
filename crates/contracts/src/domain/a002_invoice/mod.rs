pub mod aggregate;
pub mod draft;
pub mod line_item;
pub mod totals;
