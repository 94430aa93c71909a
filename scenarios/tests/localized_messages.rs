//! Scenarios with overridden messages and patterns.

use vet_model::{Field, Form};
use vet_scenarios::prelude::*;
use vet_validation::ValidationConfig;

#[test]
fn test_messages_from_fixture() {
    Scenario::new("english")
        .form_fixture("contact_form.json")
        .config_fixture("english.json")
        .input("email", "foo.bar")
        .submit(|a| {
            a.invalid()
                .annotations(3)
                .message("name", "This field is required.")
                .message("email", "Enter a valid email address.")
        })
        .run()
        .unwrap();
}

#[test]
fn test_custom_telephone_pattern() {
    // GIVEN - only ten or eleven digits, no separators
    let mut config = ValidationConfig::default();
    config.patterns.telephone = r"^\d{10,11}$".to_string();
    let form = Form::with_fields("callback", [Field::telephone("phone").required()]).unwrap();

    Scenario::new("digits_only")
        .form(form)
        .config(config)
        .input("phone", "03-1234-5678")
        .blur("phone", |a| a.invalid().annotated("phone", Rule::TelephoneFormat))
        .input("phone", "0312345678")
        .blur("phone", |a| a.valid())
        .run()
        .unwrap();
}

#[test]
fn test_missing_fixture() {
    let err = Scenario::new("missing")
        .form_fixture("no_such_form.json")
        .run()
        .unwrap_err();
    assert!(matches!(err, ScenarioError::FileRead { .. }));
}

#[test]
fn test_missing_form() {
    let err = Scenario::new("empty").run().unwrap_err();
    assert_eq!(err.to_string(), "Scenario empty has no form");
}
