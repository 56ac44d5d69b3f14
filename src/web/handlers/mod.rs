//! HTML template rendering handlers.

mod home;
mod shorten;

pub use home::{LinkRow, home_handler};
pub use shorten::{ShortenForm, shorten_form_handler};
