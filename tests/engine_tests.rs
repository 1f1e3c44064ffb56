/// Placeholder resolution integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use sentencer::core::coerce::Value;
use sentencer::core::engine::{EngineOptions, Sentencer};

fn engine() -> Sentencer {
    Sentencer::with_seed(42)
}

#[test]
fn plain_text_is_returned_unchanged() {
    let mut s = engine();
    assert_eq!(s.make("An ordinary sentence."), "An ordinary sentence.");
    assert_eq!(s.make(""), "");
    assert_eq!(s.make("single { brace } pairs"), "single { brace } pairs");
}

#[test]
fn merged_action_resolves() {
    let mut s = engine();
    s.configure(EngineOptions::new().action("firstNewAction", |_| Some(Value::text("hello"))));
    assert_eq!(s.make("{{ firstNewAction }}"), "hello");
}

#[test]
fn second_merge_keeps_first_action() {
    let mut s = engine();
    s.configure(EngineOptions::new().action("firstNewAction", |_| Some(Value::text("hello"))));
    s.configure(
        EngineOptions::new().action("secondNewAction", |_| Some(Value::text("hello again"))),
    );

    assert!(s.registry().has("firstNewAction"), "first action still exists");
    assert!(s.registry().has("secondNewAction"), "second action exists as well");
    assert_eq!(s.make("{{ firstNewAction }}"), "hello");
    assert_eq!(s.make("{{ secondNewAction }}"), "hello again");
}

#[test]
fn remerging_the_same_action_is_idempotent() {
    let mut s = engine();
    s.configure(EngineOptions::new().action("stable", |_| Some(Value::text("same"))));
    s.configure(EngineOptions::new().action("stable", |_| Some(Value::text("same"))));
    assert_eq!(s.registry().len(), 1);
    assert_eq!(s.make("{{stable}} {{stable}}"), "same same");
}

#[test]
fn unknown_bare_action_passes_through() {
    let mut s = engine();
    assert_eq!(s.make("{{ nonexistent thing }}"), "{{ nonexistent thing }}");
    assert_eq!(s.make("{{nonexistent thing}}"), "{{nonexistent thing}}");
}

#[test]
fn action_with_one_argument() {
    let mut s = engine();
    s.configure(EngineOptions::new().action("withArgument", |args| args.first().cloned()));
    assert_eq!(s.make("{{ withArgument(1) }}"), "1");
}

#[test]
fn action_with_multiple_arguments() {
    let mut s = engine();
    s.configure(
        EngineOptions::new().action("withArguments", |args| Some(Value::number(args.len() as f64))),
    );
    assert_eq!(s.make("{{ withArguments(1,2,3) }}"), "3");
}

#[test]
fn arguments_cast_to_numbers_when_possible() {
    let seen: Rc<RefCell<Option<Vec<Value>>>> = Rc::new(RefCell::new(None));
    let seen_in_action = Rc::clone(&seen);

    let mut s = engine();
    s.configure(EngineOptions::new().action("test", move |args| {
        *seen_in_action.borrow_mut() = Some(args.to_vec());
        Some(Value::text(""))
    }));

    s.make("{{ test(1, hey hello, 2) }}");
    assert_eq!(
        seen.borrow().as_ref().unwrap().as_slice(),
        &[
            Value::number(1.0),
            Value::text("hey hello"),
            Value::number(2.0),
        ]
    );
}

#[test]
fn unknown_call_form_fails_silently() {
    let mut s = engine();
    assert_eq!(s.make("{{ nonExistentThing(1,2,3) }}"), "");
}

#[test]
fn call_form_with_empty_argument_list_fails_silently() {
    let mut s = engine();
    s.configure(EngineOptions::new().action("known", |_| Some(Value::text("x"))));
    assert_eq!(s.make("{{ known() }}"), "");
}

#[test]
fn failing_action_invocation_is_swallowed() {
    let mut s = engine();
    s.configure(EngineOptions::new().action("explodes", |_| None));
    // A failing placeholder never aborts resolution of the rest.
    s.configure(EngineOptions::new().action("fine", |_| Some(Value::text("ok"))));
    assert_eq!(
        s.make("{{ explodes(1) }} and {{ fine }}"),
        " and ok"
    );
}

#[test]
fn embedded_code_is_never_evaluated() {
    let mut s = engine();
    let template = "{{nothing; console.log(...);}}";
    assert_eq!(s.make(template), template);
}

#[test]
fn garbage_tokens_pass_through() {
    let mut s = engine();
    assert_eq!(s.make("{{ *&^%$ }}"), "{{ *&^%$ }}");
    assert_eq!(s.make("{{ (1,2) }}"), "{{ (1,2) }}");
}

#[test]
fn nested_call_is_not_a_call_form() {
    let mut s = engine();
    s.configure(EngineOptions::new().action("f", |args| args.first().cloned()));
    // The interior contains parentheses, so this is not recognized as a call
    // and the whole text fails the bare lookup too.
    assert_eq!(s.make("{{ f(f(1)) }}"), "{{ f(f(1)) }}");
}

#[test]
fn each_occurrence_gets_an_independent_result() {
    let calls = Rc::new(RefCell::new(0u32));
    let calls_in_action = Rc::clone(&calls);

    let mut s = engine();
    s.configure(EngineOptions::new().action("tick", move |_| {
        *calls_in_action.borrow_mut() += 1;
        Some(Value::number(*calls_in_action.borrow() as f64))
    }));

    assert_eq!(s.make("{{tick}} {{tick}} {{tick}}"), "1 2 3");
    assert_eq!(*calls.borrow(), 3, "generator re-invoked per occurrence");
}

#[test]
fn substitution_is_positional_for_identical_tokens() {
    let mut s = engine();
    s.configure(EngineOptions::new().action("word", |_| Some(Value::text("x"))));
    assert_eq!(s.make("{{word}}, {{word}}!"), "x, x!");
}

#[test]
fn mixed_template_resolves_in_scan_order() {
    let mut s = engine();
    s.configure(
        EngineOptions::new()
            .action("adjective", |_| Some(Value::text("green")))
            .action("noun", |_| Some(Value::text("door"))),
    );
    assert_eq!(
        s.make("Behind the {{adjective}} {{noun}} was {{mystery}}."),
        "Behind the green door was {{mystery}}."
    );
}

#[test]
fn numeric_results_render_without_decimal_point() {
    let mut s = engine();
    s.configure(
        EngineOptions::new()
            .action("int", |_| Some(Value::number(3.0)))
            .action("frac", |_| Some(Value::number(0.5))),
    );
    assert_eq!(s.make("{{int}} / {{frac}}"), "3 / 0.5");
}

#[test]
fn same_seed_same_sentence() {
    let make_engine = || {
        let mut s = Sentencer::with_seed(7);
        s.configure(EngineOptions::new().action_with_rng("coin", |rng, _| {
            use rand::Rng;
            Some(Value::text(if rng.gen_bool(0.5) { "heads" } else { "tails" }))
        }));
        s
    };

    let mut a = make_engine();
    let mut b = make_engine();
    for _ in 0..20 {
        assert_eq!(a.make("{{coin}} {{coin}}"), b.make("{{coin}} {{coin}}"));
    }
}

#[test]
fn derived_instances_are_isolated() {
    let mut base = engine();
    base.configure(EngineOptions::new().action("base_action", |_| Some(Value::text("base"))));

    let mut derived =
        base.derive(EngineOptions::new().action("derived_action", |_| Some(Value::text("derived"))));

    assert_eq!(base.make("{{base_action}}"), "base");
    assert_eq!(base.make("{{derived_action}}"), "{{derived_action}}");
    assert_eq!(derived.make("{{derived_action}}"), "derived");
    assert_eq!(derived.make("{{base_action}}"), "{{base_action}}");
}
