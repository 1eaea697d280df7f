mod client;
mod header;
mod line_items;
mod summary;

pub use client::ClientSection;
pub use header::HeaderSection;
pub use line_items::LineItemsSection;
pub use summary::SummarySection;
