// ABOUTME: Integration tests for the template rendering engine
// ABOUTME: Tests substitution properties, strict variable lookup, and validation

use genconf::template::{TemplateEngine, TemplateError, VariableSet};

mod common;

#[test]
fn test_interface_template_first_unit() {
    let engine = TemplateEngine::new();
    let mut vars = VariableSet::new();
    vars.set("ifd", "ge-0/0/0");
    vars.set("unit", "101");
    vars.set("ip", "10.0.1.1/24");

    let rendered = engine.render(common::INTERFACE_TEMPLATE, &vars).unwrap();
    assert_eq!(
        rendered,
        "set interface ge-0/0/0 unit 101 family inet address 10.0.1.1/24"
    );
}

#[test]
fn test_interface_template_second_unit() {
    let engine = TemplateEngine::new();
    let mut vars = VariableSet::new();
    vars.set("ifd", "ge-0/0/0");
    vars.set("unit", "102");
    vars.set("ip", "10.0.2.1/24");

    let rendered = engine.render(common::INTERFACE_TEMPLATE, &vars).unwrap();
    assert_eq!(
        rendered,
        "set interface ge-0/0/0 unit 102 family inet address 10.0.2.1/24"
    );
}

#[test]
fn test_fully_bound_templates_leave_no_markers() {
    let engine = TemplateEngine::new();

    let cases = [
        ("{{ a }}", "a: 1\n"),
        ("{{ a }} and {{ b }}", "a: x\nb: y\n"),
        ("literal text only", ""),
        ("{{ outer.inner }}", "outer:\n  inner: deep\n"),
    ];

    for (template, vars_yaml) in cases {
        let vars = genconf::loader::parse_variables(vars_yaml).unwrap();
        let rendered = engine.render(template, &vars).unwrap();
        assert!(
            !engine.has_placeholders(&rendered),
            "markers left in output for template {template:?}: {rendered:?}"
        );
    }
}

#[test]
fn test_rendering_same_pair_twice_is_identical() {
    let engine = TemplateEngine::new();
    let vars = genconf::loader::parse_variables(common::INTERFACE_VARS_YAML).unwrap();

    let first = engine.render(common::INTERFACE_TEMPLATE, &vars).unwrap();
    let second = engine.render(common::INTERFACE_TEMPLATE, &vars).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_undefined_variable_fails_and_names_it() {
    let engine = TemplateEngine::new();
    let mut vars = VariableSet::new();
    vars.set("present", "here");

    let err = engine
        .render("{{ present }} and {{ missing }}", &vars)
        .unwrap_err();

    match err {
        TemplateError::MissingVariable(name) => assert_eq!(name, "missing"),
        other => panic!("expected MissingVariable, got: {other}"),
    }
}

#[test]
fn test_validate_accepts_and_rejects() {
    let engine = TemplateEngine::new();

    assert!(engine.validate(common::INTERFACE_TEMPLATE).is_ok());
    assert!(matches!(
        engine.validate("set interface {{ ifd }"),
        Err(TemplateError::SyntaxError(_))
    ));
}
