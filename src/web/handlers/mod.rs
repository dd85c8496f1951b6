//! Template rendering handlers for the HTML UI.

pub mod index;
pub mod info;
pub mod not_found;
pub mod redirect;
pub mod shorten;

pub use index::index_handler;
pub use info::info_handler;
pub use redirect::follow_handler;
pub use shorten::shorten_form_handler;
