//! Notification banners.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use vet_site::notification::{ANIMATION_OUT, DISPLAY_MS, EXIT_MS, KEYFRAMES_CSS};
use vet_site::{Notification, NotificationCenter, NotificationId, Phase};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom::{self, set_style};
use crate::error::{WebError, WebResult};

struct State {
    center: NotificationCenter,
    banners: BTreeMap<NotificationId, Element>,
}

/// Shows notification banners and retires them on timers.
#[derive(Clone)]
pub struct Notifier {
    document: Document,
    state: Rc<RefCell<State>>,
}

impl Notifier {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            state: Rc::new(RefCell::new(State {
                center: NotificationCenter::new(),
                banners: BTreeMap::new(),
            })),
        }
    }

    /// Add the slide-in and slide-out keyframes to the document head.
    pub fn install_keyframes(&self) -> WebResult<()> {
        let head = self
            .document
            .head()
            .ok_or(WebError::MissingGlobal("document.head"))?;
        let style = self.document.create_element("style")?;
        style.set_text_content(Some(KEYFRAMES_CSS));
        head.append_child(&style)?;
        Ok(())
    }

    /// Show a banner and schedule its exit.
    pub fn show(&self, notification: Notification) -> WebResult<NotificationId> {
        let banner = self.document.create_element("div")?;
        banner.set_class_name(&notification.kind.class_name());
        banner.set_attribute("style", &notification.css_text())?;
        banner.set_text_content(Some(&notification.message));
        dom::body(&self.document)?.append_child(&banner)?;

        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.center.show(notification, now());
            state.banners.insert(id, banner);
            id
        };

        self.schedule(DISPLAY_MS)?;
        self.schedule(DISPLAY_MS + EXIT_MS)?;
        Ok(id)
    }

    fn schedule(&self, delay_ms: u64) -> WebResult<()> {
        let notifier = self.clone();
        let callback = Closure::once_into_js(move || notifier.tick());
        dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        )?;
        Ok(())
    }

    fn tick(&self) {
        let mut state = self.state.borrow_mut();
        let changes = state.center.tick(now());
        for (id, phase) in changes {
            match phase {
                Phase::Entering => {}
                Phase::Leaving => {
                    if let Some(banner) = state.banners.get(&id) {
                        let animation = format!("{} 0.3s ease-in", ANIMATION_OUT);
                        if let Err(e) = set_style(banner, "animation", &animation) {
                            log::warn!("cannot animate notification {:?}: {}", id, e);
                        }
                    }
                }
                Phase::Removed => {
                    if let Some(banner) = state.banners.remove(&id) {
                        banner.remove();
                    }
                }
            }
        }
    }
}

fn now() -> u64 {
    js_sys::Date::now() as u64
}
