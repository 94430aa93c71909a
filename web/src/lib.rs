//! Vet Site Web
//!
//! Binds the page controllers to the live document. The page loads the
//! generated module and creates one `VetHospital`, which wires the menu,
//! every form, scroll reveal and navigation highlighting, and exposes the
//! helpers inline markup calls (notifications, emergency dialog, page hooks).

mod bindings;
mod dom;
mod error;
mod forms;
mod logger;
mod notify;
mod reveal;

pub use bindings::VetHospital;
pub use dom::DomSurface;
pub use error::{WebError, WebResult};
pub use forms::read_form;
