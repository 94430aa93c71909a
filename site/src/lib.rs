//! Vet Site Controllers
//!
//! Browser-independent behavior of the site's pages. Each controller keeps
//! its own state and answers typed events with a reaction the DOM adapter
//! applies; nothing here touches the document.
//!
//! # Module Structure
//!
//! - `forms` - FormController: blur and submit handling over the validation engine
//! - `menu` - Mobile navigation toggle
//! - `navigation` - Active-link highlighting
//! - `notification` - Transient notifications and their timed lifecycle
//! - `reveal` - Scroll-triggered fade-in
//! - `emergency` - Emergency call link and information dialog
//! - `pages` - Page detection and page-specific hooks
//! - `error` - Error types for controller operations

pub mod emergency;
mod error;
pub mod forms;
pub mod menu;
pub mod navigation;
pub mod notification;
pub mod pages;
pub mod reveal;

pub use error::{SiteError, SiteResult};
pub use forms::{FormController, FormEvent, FormReaction, SubmitMode, SubmitOutcome};
pub use menu::MenuController;
pub use notification::{Notification, NotificationCenter, NotificationId, NotificationKind, Phase};
pub use pages::Page;
pub use reveal::{RevealOptions, RevealTracker};
