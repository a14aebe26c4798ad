//! HTML template rendering handlers for the certificate page.

mod form;
mod page;
mod submit;

pub use form::form_handler;
pub use page::{CertificatePage, SubzoneOption};
pub use submit::submit_handler;
