//! Page detection and page-specific hooks.

use vet_model::messages::LOG_SERVICE_DETAILS;

use crate::navigation::current_page;

/// Hero call-to-action on the home page.
pub const HERO_BUTTON_SELECTOR: &str = ".hero .btn";
/// Section the hero button scrolls to.
pub const CONTACT_SECTION_ID: &str = "contact";
/// The contact page's form.
pub const CONTACT_FORM_ID: &str = "contact-form";
/// Clickable service cards on the services page.
pub const SERVICE_CARD_SELECTOR: &str = ".service-card";
/// Attribute naming a card's service.
pub const SERVICE_ATTR: &str = "data-service";

/// The site's pages that carry their own behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Contact,
    Services,
    Other,
}

impl Page {
    /// Identify the page from `location.pathname`.
    pub fn from_path(pathname: &str) -> Self {
        match current_page(pathname) {
            "index.html" => Page::Home,
            "contact.html" => Page::Contact,
            "services.html" => Page::Services,
            _ => Page::Other,
        }
    }
}

/// A service card was clicked.
///
/// Detail panels are not published yet; the selection is only logged.
pub fn service_selected(service_id: Option<&str>) {
    log::info!("{} {}", LOG_SERVICE_DETAILS, service_id.unwrap_or("null"));
}
