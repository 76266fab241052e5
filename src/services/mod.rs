//! Application service layer.
//!
//! Services take raw text from the command layer, build validated fields,
//! and drive the address book and its storage.

mod contact_service;

pub use contact_service::ContactService;
