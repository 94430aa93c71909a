//! Browser tests for reading form controls into a `Form`.
//!
//! Run with `wasm-pack test --headless --firefox web`.

#![cfg(target_arch = "wasm32")]

use vet_model::{FieldId, FieldType};
use vet_web::read_form;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlFormElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> HtmlFormElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let form = document.create_element("form").unwrap();
    form.set_inner_html(html);
    document.body().unwrap().append_child(&form).unwrap();
    form.dyn_into::<HtmlFormElement>().unwrap()
}

#[wasm_bindgen_test]
fn controls_without_values_are_skipped() {
    // GIVEN
    let element = mount(
        r#"<input name="name" required>
           <input type="hidden" name="token" value="x">
           <input type="submit" value="send">
           <input type="button" name="b">
           <input type="reset">
           <input type="image" name="i">
           <textarea name="message"></textarea>"#,
    );

    // WHEN
    let (form, inputs) = read_form(&element, "f").unwrap();

    // THEN
    let names: Vec<_> = form.fields().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(names, vec!["name", "message"]);
    assert_eq!(inputs.len(), 2);
    assert!(form.field(&FieldId::new("name")).unwrap().required);
}

#[wasm_bindgen_test]
fn controls_named_by_name_then_id_then_position() {
    // GIVEN
    let element = mount(
        r#"<input name="email" id="mail" type="email">
           <input id="phone" type="tel">
           <input type="text">"#,
    );

    // WHEN
    let (form, _) = read_form(&element, "f").unwrap();

    // THEN
    let names: Vec<_> = form.fields().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(names, vec!["email", "phone", "field-2"]);
    assert_eq!(
        form.field(&FieldId::new("phone")).unwrap().field_type,
        FieldType::Telephone
    );
}

#[wasm_bindgen_test]
fn repeated_name_keeps_first_element() {
    // GIVEN - a radio group sharing one name
    let element = mount(
        r#"<input type="radio" name="pet" value="dog" id="first">
           <input type="radio" name="pet" value="cat" id="second">"#,
    );

    // WHEN
    let (form, inputs) = read_form(&element, "f").unwrap();

    // THEN
    assert_eq!(form.len(), 1);
    assert_eq!(form.field(&FieldId::new("pet")).unwrap().value, "dog");
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].1.id(), "first");
}
