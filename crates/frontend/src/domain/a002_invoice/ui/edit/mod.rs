//! Invoice Edit UI Module
//!
//! - model.rs: API functions (invoice record, company profile)
//! - view_model.rs: editing state and commands
//! - page.rs: route container, loads the record
//! - view.rs + sections/: Leptos components (pure UI)

mod model;
mod page;
mod sections;
mod view;
mod view_model;

pub use page::InvoiceEditPage;
pub use view::InvoiceEditCard;
pub use view_model::InvoiceEditVm;
