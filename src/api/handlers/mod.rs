//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clicks;
pub mod docs;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod url_info;

pub use clicks::clicks_handler;
pub use docs::docs_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use url_info::url_info_handler;
