//! DOM helpers and the document-backed rendering surface.

use std::collections::BTreeMap;

use vet_model::FieldId;
use vet_validation::{Affordance, ErrorAnnotation, RenderSurface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::{WebError, WebResult};

/// Class of an annotation element.
pub const ERROR_CLASS: &str = "error-message";

pub fn window() -> WebResult<Window> {
    web_sys::window().ok_or(WebError::MissingGlobal("window"))
}

pub fn document() -> WebResult<Document> {
    window()?
        .document()
        .ok_or(WebError::MissingGlobal("document"))
}

pub fn body(document: &Document) -> WebResult<HtmlElement> {
    document.body().ok_or(WebError::MissingGlobal("document.body"))
}

/// Collect the elements of a node list.
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set one inline style property; non-HTML elements are skipped.
pub fn set_style(element: &Element, property: &str, value: &str) -> WebResult<()> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Attach an event handler for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> WebResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Rendering surface over the fields of one form element.
///
/// Each annotation is a `div.error-message` inserted right after its field.
/// The surface keeps a handle to every annotation it inserted, so clearing
/// a field only ever removes that field's hint.
pub struct DomSurface {
    document: Document,
    fields: BTreeMap<FieldId, Element>,
    annotations: BTreeMap<FieldId, Element>,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            fields: BTreeMap::new(),
            annotations: BTreeMap::new(),
        }
    }

    /// Register the element rendering a field.
    pub fn bind(&mut self, field: FieldId, element: Element) {
        self.fields.insert(field, element);
    }

    /// Number of annotations currently in the document.
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    fn paint(&self, field: &FieldId, affordance: Affordance) {
        if let Some(element) = self.fields.get(field) {
            if let Err(e) = set_style(element, "border-color", affordance.border_color()) {
                log::warn!("cannot style field {}: {}", field, e);
            }
        }
    }

    fn insert(&mut self, annotation: &ErrorAnnotation) -> WebResult<()> {
        let field = self
            .fields
            .get(&annotation.field)
            .ok_or_else(|| WebError::dom(format!("field {} is not bound", annotation.field)))?;

        let hint = self.document.create_element("div")?;
        hint.set_class_name(ERROR_CLASS);
        set_style(&hint, "color", "#f44336")?;
        set_style(&hint, "font-size", "0.9rem")?;
        set_style(&hint, "margin-top", "0.25rem")?;
        hint.set_text_content(Some(&annotation.message));
        field.after_with_node_1(&hint)?;

        if let Some(stale) = self.annotations.insert(annotation.field.clone(), hint) {
            stale.remove();
        }
        Ok(())
    }
}

impl RenderSurface for DomSurface {
    fn clear(&mut self, field: &FieldId) {
        if let Some(hint) = self.annotations.remove(field) {
            hint.remove();
        }
        self.paint(field, Affordance::Neutral);
    }

    fn annotate(&mut self, annotation: &ErrorAnnotation) {
        if let Err(e) = self.insert(annotation) {
            log::warn!("cannot annotate field {}: {}", annotation.field, e);
        }
    }

    fn mark(&mut self, field: &FieldId, affordance: Affordance) {
        self.paint(field, affordance);
    }
}
