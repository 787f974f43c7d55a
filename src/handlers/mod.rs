//! HTTP handlers for the customer and order APIs and the editor page.

pub mod customers;
pub mod orders;
pub mod ui;
