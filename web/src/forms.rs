//! Form wiring: reads a form element into a `Form`, forwards blur and submit
//! events to its `FormController`, and applies the reactions.

use std::cell::RefCell;
use std::rc::Rc;

use vet_model::{Field, FieldId, FieldType, Form, ModelError};
use vet_site::{FormController, FormEvent, FormReaction, SiteResult, SubmitMode, SubmitOutcome};
use vet_validation::ValidationEngine;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom::{self, listen, DomSurface};
use crate::error::WebResult;
use crate::notify::Notifier;

/// Inputs that carry no visitor-entered value.
const SKIPPED_INPUT_TYPES: [&str; 5] = ["submit", "button", "reset", "hidden", "image"];

struct Bound {
    controller: FormController,
    surface: DomSurface,
    inputs: Vec<(FieldId, Element)>,
}

impl Bound {
    fn handle(&mut self, event: FormEvent) -> SiteResult<FormReaction> {
        self.controller.handle(event, &mut self.surface)
    }

    /// Copy every value from the document into the controller.
    fn sync(&mut self) -> SiteResult<()> {
        for (field, element) in &self.inputs {
            if let Some(value) = value_of(element) {
                self.controller.handle(
                    FormEvent::FieldInput {
                        field: field.clone(),
                        value,
                    },
                    &mut self.surface,
                )?;
            }
        }
        Ok(())
    }
}

/// A form element with its controller.
#[derive(Clone)]
pub struct FormBinding {
    id: String,
    element: HtmlFormElement,
    inner: Rc<RefCell<Bound>>,
}

impl FormBinding {
    /// Read a form element and attach its blur and submit handlers.
    pub fn attach(
        document: &Document,
        element: HtmlFormElement,
        index: usize,
        engine: Rc<ValidationEngine>,
        notifier: Notifier,
    ) -> WebResult<Self> {
        let id = match element.id() {
            id if id.is_empty() => format!("form-{}", index),
            id => id,
        };

        let (form, inputs) = read_form(&element, &id)?;
        let mut surface = DomSurface::new(document.clone());
        for (field, input) in &inputs {
            surface.bind(field.clone(), input.clone());
        }

        let controller = FormController::new(form, engine, SubmitMode::Native);
        let binding = Self {
            id,
            element,
            inner: Rc::new(RefCell::new(Bound {
                controller,
                surface,
                inputs,
            })),
        };
        binding.listen_blur()?;
        binding.listen_submit(notifier)?;
        Ok(binding)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_mode(&self, mode: SubmitMode) {
        self.inner.borrow_mut().controller.set_mode(mode);
    }

    pub fn set_engine(&self, engine: Rc<ValidationEngine>) {
        self.inner.borrow_mut().controller.set_engine(engine);
    }

    /// Validate the whole form without submitting it.
    pub fn validate(&self) -> WebResult<bool> {
        let mut bound = self.inner.borrow_mut();
        bound.sync()?;
        let Bound {
            controller,
            surface,
            ..
        } = &mut *bound;
        Ok(controller.validate(surface).is_valid())
    }

    fn listen_blur(&self) -> WebResult<()> {
        let inputs = self.inner.borrow().inputs.clone();
        for (field, element) in inputs {
            let inner = Rc::clone(&self.inner);
            let target = element.clone();
            listen(&element, "blur", move |_event: Event| {
                let value = value_of(&target).unwrap_or_default();
                let mut bound = inner.borrow_mut();
                let result = bound
                    .handle(FormEvent::FieldInput {
                        field: field.clone(),
                        value,
                    })
                    .and_then(|_| bound.handle(FormEvent::FieldBlurred { field: field.clone() }));
                if let Err(e) = result {
                    log::warn!("blur on {} failed: {}", field, e);
                }
            })?;
        }
        Ok(())
    }

    fn listen_submit(&self, notifier: Notifier) -> WebResult<()> {
        let inner = Rc::clone(&self.inner);
        let element = self.element.clone();
        let id = self.id.clone();
        listen(&self.element, "submit", move |event: Event| {
            let outcome = {
                let mut bound = inner.borrow_mut();
                bound
                    .sync()
                    .and_then(|_| bound.handle(FormEvent::Submitted))
            };
            match outcome {
                Ok(FormReaction::Submit(outcome)) => apply(&event, &element, &notifier, outcome),
                Ok(_) => {}
                Err(e) => {
                    log::warn!("submit of {} failed: {}", id, e);
                    event.prevent_default();
                }
            }
        })
    }
}

fn apply(event: &Event, element: &HtmlFormElement, notifier: &Notifier, outcome: SubmitOutcome) {
    if outcome.prevent_default {
        event.prevent_default();
    }
    if let Some(notification) = outcome.notification {
        if let Err(e) = notifier.show(notification) {
            log::warn!("cannot show notification: {}", e);
        }
    }
    if outcome.reset {
        element.reset();
    }
}

/// Read the visitor-editable controls of a form element into a `Form`.
///
/// Buttons and hidden inputs are skipped. A control is named by its `name`,
/// then its `id`, then its position. A repeated name keeps its first element.
pub fn read_form(element: &HtmlFormElement, id: &str) -> WebResult<(Form, Vec<(FieldId, Element)>)> {
    let mut form = Form::new(id);
    let mut inputs = Vec::new();
    for (i, input) in dom::elements(element.query_selector_all("input, textarea")?)
        .into_iter()
        .enumerate()
    {
        let Some(field) = read_field(&input, i) else {
            continue;
        };
        let field_id = field.id.clone();
        match form.push(field) {
            Ok(()) => inputs.push((field_id, input)),
            Err(ModelError::DuplicateField { .. }) => {
                log::debug!("{} repeats field {}, keeping the first", id, field_id);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok((form, inputs))
}

fn read_field(element: &Element, index: usize) -> Option<Field> {
    let (name, field_type, value, required) =
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            let kind = input.type_();
            if SKIPPED_INPUT_TYPES.contains(&kind.as_str()) {
                return None;
            }
            (input.name(), FieldType::from_html(&kind), input.value(), input.required())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            (area.name(), FieldType::Text, area.value(), area.required())
        } else {
            return None;
        };

    let name = match (name, element.id()) {
        (name, _) if !name.is_empty() => name,
        (_, id) if !id.is_empty() => id,
        _ => format!("field-{}", index),
    };

    let field = Field::new(name, field_type).with_value(value);
    Some(if required { field.required() } else { field })
}

fn value_of(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else {
        element.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
    }
}
