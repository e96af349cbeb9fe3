//! Page handlers.

pub mod error_page;
pub mod invalid_link;

pub use error_page::error_page_handler;
pub use invalid_link::invalid_link_handler;
