use std::cell::RefCell;
use std::rc::Rc;

use log::LevelFilter;
use vet_site::emergency::{call_href, EmergencyInfo};
use vet_site::menu::{ACTIVE_CLASS, MENU_SELECTOR, TOGGLE_SELECTOR};
use vet_site::navigation::{active_links, current_page, ACTIVE_COLOR, ACTIVE_WEIGHT, NAV_LINK_SELECTOR};
use vet_site::pages::{
    service_selected, CONTACT_FORM_ID, CONTACT_SECTION_ID, HERO_BUTTON_SELECTOR, SERVICE_ATTR,
    SERVICE_CARD_SELECTOR,
};
use vet_site::{MenuController, Notification, NotificationKind, Page, RevealOptions, SubmitMode};
use vet_validation::{ValidationConfig, ValidationEngine};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlFormElement, IntersectionObserver, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::{self, listen, set_style};
use crate::error::WebResult;
use crate::forms::FormBinding;
use crate::notify::Notifier;
use crate::reveal;

/// Page-level entry point, created once when the document is ready.
#[wasm_bindgen]
pub struct VetHospital {
    document: Document,
    notifier: Notifier,
    forms: Vec<FormBinding>,
    _observer: Option<IntersectionObserver>,
}

#[wasm_bindgen]
impl VetHospital {
    /// Wire the menu, every form, scroll reveal and navigation highlighting.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<VetHospital, JsValue> {
        console_error_panic_hook::set_once();
        crate::logger::init(LevelFilter::Info);
        Ok(Self::init()?)
    }

    /// Show a transient banner. `kind` is `"success"` (default) or `"error"`.
    #[wasm_bindgen]
    pub fn show_notification(&self, message: &str, kind: Option<String>) -> Result<(), JsValue> {
        let kind = kind
            .as_deref()
            .map(NotificationKind::parse)
            .unwrap_or_default();
        self.notifier.show(Notification::new(message, kind))?;
        Ok(())
    }

    /// Start a call to the emergency line.
    #[wasm_bindgen]
    pub fn call_emergency(&self) -> Result<(), JsValue> {
        dom::window()?.location().set_href(&call_href())?;
        Ok(())
    }

    /// Open the emergency information dialog.
    #[wasm_bindgen]
    pub fn show_emergency_info(&self) -> Result<(), JsValue> {
        Ok(self.open_emergency_dialog()?)
    }

    /// Smoothly scroll an element to the top of the viewport.
    #[wasm_bindgen]
    pub fn smooth_scroll_to(&self, element: &Element) {
        scroll_to(element);
    }

    /// Home page: the hero button scrolls to the contact section.
    #[wasm_bindgen]
    pub fn init_home_page(&self) -> Result<(), JsValue> {
        Ok(self.wire_home()?)
    }

    /// Contact page: the contact form thanks the visitor instead of submitting.
    #[wasm_bindgen]
    pub fn init_contact_page(&self) {
        match self.forms.iter().find(|f| f.id() == CONTACT_FORM_ID) {
            Some(form) => form.set_mode(SubmitMode::Contact),
            None => log::debug!("no #{} on this page", CONTACT_FORM_ID),
        }
    }

    /// Services page: clicking a service card reports its service id.
    #[wasm_bindgen]
    pub fn init_services_page(&self) -> Result<(), JsValue> {
        Ok(self.wire_services()?)
    }

    /// Run the hooks of the page the document was loaded from.
    #[wasm_bindgen]
    pub fn init_current_page(&self) -> Result<(), JsValue> {
        let path = dom::window()?.location().pathname()?;
        match Page::from_path(&path) {
            Page::Home => self.init_home_page(),
            Page::Contact => {
                self.init_contact_page();
                Ok(())
            }
            Page::Services => self.init_services_page(),
            Page::Other => Ok(()),
        }
    }

    /// Override validation messages or patterns for every form on the page.
    #[wasm_bindgen]
    pub fn configure_validation(&self, config: JsValue) -> Result<(), JsValue> {
        let config: ValidationConfig =
            serde_wasm_bindgen::from_value(config).map_err(crate::WebError::from)?;
        let engine = Rc::new(ValidationEngine::new(&config).map_err(crate::WebError::from)?);
        for form in &self.forms {
            form.set_engine(Rc::clone(&engine));
        }
        Ok(())
    }

    /// Validate a form without submitting it.
    #[wasm_bindgen]
    pub fn validate_form(&self, form_id: &str) -> Result<bool, JsValue> {
        match self.forms.iter().find(|f| f.id() == form_id) {
            Some(form) => Ok(form.validate()?),
            None => Err(JsValue::from_str(&format!("Unknown form: #{}", form_id))),
        }
    }
}

impl VetHospital {
    fn init() -> WebResult<Self> {
        let document = dom::document()?;
        let notifier = Notifier::new(document.clone());
        notifier.install_keyframes()?;

        wire_menu(&document)?;
        let engine = Rc::new(ValidationEngine::with_defaults()?);
        let forms = wire_forms(&document, &engine, &notifier)?;
        let window = dom::window()?;
        let observer = if js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
            Some(reveal::observe(&document, &RevealOptions::default())?)
        } else {
            log::info!("IntersectionObserver unavailable, reveal disabled");
            None
        };
        highlight_navigation(&document)?;

        log::info!("vet site ready: {} form(s)", forms.len());
        Ok(Self {
            document,
            notifier,
            forms,
            _observer: observer,
        })
    }

    fn open_emergency_dialog(&self) -> WebResult<()> {
        let modal = self.document.create_element("div")?;
        modal.set_inner_html(&EmergencyInfo::standard().render_html());
        dom::body(&self.document)?.append_child(&modal)?;

        if let Some(close) = modal.query_selector("[data-close]")? {
            let dialog = modal.clone();
            listen(&close, "click", move |_event: Event| dialog.remove())?;
        }
        Ok(())
    }

    fn wire_home(&self) -> WebResult<()> {
        let Some(button) = self.document.query_selector(HERO_BUTTON_SELECTOR)? else {
            return Ok(());
        };
        let document = self.document.clone();
        listen(&button, "click", move |event: Event| {
            event.prevent_default();
            if let Some(section) = document.get_element_by_id(CONTACT_SECTION_ID) {
                scroll_to(&section);
            }
        })
    }

    fn wire_services(&self) -> WebResult<()> {
        for card in dom::elements(self.document.query_selector_all(SERVICE_CARD_SELECTOR)?) {
            let target = card.clone();
            listen(&card, "click", move |_event: Event| {
                service_selected(target.get_attribute(SERVICE_ATTR).as_deref());
            })?;
        }
        Ok(())
    }
}

fn wire_menu(document: &Document) -> WebResult<()> {
    let (Some(toggle), Some(menu)) = (
        document.query_selector(TOGGLE_SELECTOR)?,
        document.query_selector(MENU_SELECTOR)?,
    ) else {
        return Ok(());
    };

    let state = Rc::new(RefCell::new(MenuController::new()));
    let bars = dom::elements(toggle.query_selector_all("span")?);

    let render = {
        let menu = menu.clone();
        let bars = bars.clone();
        move |controller: &MenuController| -> WebResult<()> {
            menu.class_list()
                .toggle_with_force(ACTIVE_CLASS, controller.is_open())?;
            for bar in &bars {
                set_style(bar, "transform", controller.bar_transform())?;
            }
            Ok(())
        }
    };

    {
        let state = Rc::clone(&state);
        let render = render.clone();
        listen(&toggle, "click", move |_event: Event| {
            let mut controller = state.borrow_mut();
            controller.toggle();
            if let Err(e) = render(&*controller) {
                log::warn!("cannot toggle menu: {}", e);
            }
        })?;
    }

    for link in dom::elements(menu.query_selector_all("a")?) {
        let state = Rc::clone(&state);
        let render = render.clone();
        listen(&link, "click", move |_event: Event| {
            let mut controller = state.borrow_mut();
            controller.link_clicked();
            if let Err(e) = render(&*controller) {
                log::warn!("cannot close menu: {}", e);
            }
        })?;
    }
    Ok(())
}

fn wire_forms(
    document: &Document,
    engine: &Rc<ValidationEngine>,
    notifier: &Notifier,
) -> WebResult<Vec<FormBinding>> {
    dom::elements(document.query_selector_all("form")?)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlFormElement>().ok())
        .enumerate()
        .map(|(i, form)| FormBinding::attach(document, form, i, Rc::clone(engine), notifier.clone()))
        .collect()
}

fn highlight_navigation(document: &Document) -> WebResult<()> {
    let path = dom::window()?.location().pathname()?;
    let current = current_page(&path);
    let links = dom::elements(document.query_selector_all(NAV_LINK_SELECTOR)?);
    let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();

    for i in active_links(hrefs.iter().map(|h| h.as_deref()), current) {
        set_style(&links[i], "color", ACTIVE_COLOR)?;
        set_style(&links[i], "font-weight", ACTIVE_WEIGHT)?;
    }
    Ok(())
}

fn scroll_to(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
