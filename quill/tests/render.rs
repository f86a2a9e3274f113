use quill::{Engine, Error, RenderError};
use serde::Serialize;
use serde_json::json;

fn render(src: &str, data: serde_json::Value) -> String {
    Engine::new().render(src, &data).unwrap()
}

fn upper_engine() -> Engine {
    let engine = Engine::new();
    engine.register_tag("upper", |_, _, body| Ok(body.unwrap_or_default().to_uppercase()));
    engine
}

#[test]
fn plain_text_renders_as_itself() {
    assert_eq!(render("Hello, world!", json!({})), "Hello, world!");
}

#[test]
fn whitespace_is_stripped() {
    assert_eq!(render("a\nb\tc\rd", json!({})), "abcd");
    assert_eq!(render("<ul>\n\t<li>{{x}}</li>\n</ul>", json!({"x": 1})), "<ul><li>1</li></ul>");
}

#[test]
fn variables() {
    assert_eq!(render("{{x}}", json!({"x": "v"})), "v");
    assert_eq!(render("{{ x }}", json!({"x": "v"})), "v");
    assert_eq!(render("{{missing}}", json!({})), "");
    assert_eq!(render("{{n}} {{b}} {{z}}", json!({"n": 3, "b": false, "z": null})), "3 false null");
}

#[test]
fn dotted_names_are_a_single_key() {
    assert_eq!(render("{{user.name}}", json!({"user": {"name": "Ada"}})), "");
    assert_eq!(render("{{user.name}}", json!({"user.name": "Ada"})), "Ada");
}

#[test]
fn non_object_data_is_empty() {
    assert_eq!(render("[{{x}}]", json!("x")), "[]");
    assert_eq!(render("[{{x}}]", json!(null)), "[]");
}

#[test]
fn comments_are_stripped() {
    assert_eq!(render("a{# note #}b", json!({})), "ab");
}

#[test]
fn unknown_tags_render_nothing() {
    assert_eq!(render("{% nope %}", json!({})), "");
    assert_eq!(render("a{% nope x %}b", json!({})), "ab");
    assert_eq!(render("a{% nope %}b{% endnope %}c", json!({})), "ac");
}

#[test]
fn near_delimiters_are_literal() {
    assert_eq!(render("a{b", json!({})), "a{b");
    assert_eq!(render("x}y", json!({})), "x}y");
    assert_eq!(render("50% #1 {", json!({})), "50% #1 {");
    assert_eq!(render("{{ open", json!({})), "{{ open");
}

#[test]
fn block_body_is_passed_to_the_tag() {
    let engine = upper_engine();
    assert_eq!(
        engine.render("{% upper %}hi{% endupper %}", &json!({})).unwrap(),
        "HI"
    );
    assert_eq!(
        engine
            .render("<{% upper %}hi {{name}}{% endupper %}>", &json!({"name": "ada"}))
            .unwrap(),
        "<HI ADA>"
    );
}

#[test]
fn arguments_are_literal_strings() {
    let engine = Engine::new();
    engine.register_tag("args", |_, args, body| Ok(format!("{:?} {:?}", args, body)));
    assert_eq!(
        engine.render("{% args x {{y}} %}", &json!({"x": 1})).unwrap(),
        r#"["x", "{{y}}"] None"#
    );
    assert_eq!(
        engine.render("{% args a %}b{% endargs %}", &json!({})).unwrap(),
        r#"["a"] Some("b")"#
    );
}

#[test]
fn body_is_kept_apart_from_arguments() {
    let engine = Engine::new();
    engine.register_tag("show", |_, args, body| Ok(format!("{:?}/{:?}", args, body)));
    let standalone = engine.render("{% show hi %}", &json!({})).unwrap();
    let block = engine.render("{% show %}hi{% endshow %}", &json!({})).unwrap();
    assert_eq!(standalone, r#"["hi"]/None"#);
    assert_eq!(block, r#"[]/Some("hi")"#);
    assert_ne!(standalone, block);
    assert_eq!(
        engine.render("{% show %}{% endshow %}", &json!({})).unwrap(),
        r#"[]/Some("")"#
    );
}

#[test]
fn tags_see_the_data() {
    let engine = Engine::new();
    engine.register_tag("count", |data, _, _| {
        Ok(data["items"].as_array().map_or(0, Vec::len).to_string())
    });
    assert_eq!(
        engine.render("{% count %} items", &json!({"items": [1, 2, 3]})).unwrap(),
        "3 items"
    );
}

#[test]
fn nested_blocks_of_the_same_name() {
    let engine = Engine::new();
    engine.register_tag("wrap", |_, _, body| Ok(format!("({})", body.unwrap_or_default())));
    assert_eq!(
        engine
            .render("{% wrap %}a{% wrap %}b{% endwrap %}c{% endwrap %}", &json!({}))
            .unwrap(),
        "(a(b)c)"
    );
}

#[test]
fn standalone_tag_inside_a_block_is_an_error() {
    let err = upper_engine()
        .render("{% upper %}{% now %}{% endupper %}", &json!({}))
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn close_without_open_is_an_error() {
    let err = Engine::new().compile("a{% endfor %}").unwrap_err();
    assert_eq!(err.to_string(), "unexpected {% endfor %} with no open block");
}

#[test]
fn deeply_nested_blocks_are_rejected() {
    let depth = 20_000;
    let src = format!("{}x{}", "{% a %}".repeat(depth), "{% enda %}".repeat(depth));
    let err = Engine::new().render(&src, &json!({})).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.to_string(), "syntax error: blocks nested deeper than 256");
}

#[test]
fn nesting_at_the_limit_renders() {
    let depth = quill::parser::MAX_DEPTH;
    let engine = Engine::new();
    engine.register_tag("a", |_, _, body| Ok(format!("<{}>", body.unwrap_or_default())));
    let src = format!("{}x{}", "{% a %}".repeat(depth), "{% enda %}".repeat(depth));
    let rendered = engine.render(&src, &json!({})).unwrap();
    assert_eq!(rendered, format!("{}x{}", "<".repeat(depth), ">".repeat(depth)));
}

#[test]
fn missing_tag_name_is_an_error() {
    assert!(Engine::new().compile("{%  %}").is_err());
}

#[test]
fn compiled_templates_are_reusable() {
    let engine = Engine::new();
    let first = engine.compile("{{a}}-{{b}}").unwrap();
    let second = engine.compile("{{a}}-{{b}}").unwrap();
    for data in [json!({"a": 1}), json!({"a": "x", "b": [1, 2]}), json!({})] {
        assert_eq!(first.render(&data).unwrap(), second.render(&data).unwrap());
    }
    assert_eq!(first.render(&json!({"a": "x", "b": [1, 2]})).unwrap(), "x-1,2");
}

#[test]
fn tag_errors_propagate() {
    let engine = Engine::new();
    engine.register_tag("fail", |_, _, _| Err("boom".into()));
    let template = engine.compile("a{% fail %}b").unwrap();
    match template.render_empty() {
        Err(RenderError::Tag { name, source }) => {
            assert_eq!(name, "fail");
            assert_eq!(source.to_string(), "boom");
        }
        other => panic!("unexpected result {:?}", other),
    }
    let err = engine.render("{% fail %}", &json!({})).unwrap_err();
    assert_eq!(err.to_string(), "tag fail failed: boom");
}

#[derive(Serialize)]
struct Person {
    first: &'static str,
    age: u32,
}

#[test]
fn serializable_data() {
    let template = Engine::new().compile("{{first}} is {{age}}").unwrap();
    let person = Person {
        first: "Ada",
        age: 36,
    };
    assert_eq!(template.render_serialize(&person).unwrap(), "Ada is 36");
}

#[test]
fn compile_time_template() {
    mod templates {
        quill::str!("Greeting", "Hello {% upper %}{{name}}{% endupper %}!");
    }
    let engine = upper_engine();
    assert_eq!(
        templates::greeting(&engine)
            .render(&json!({"name": "ada"}))
            .unwrap(),
        "Hello ADA!"
    );
}
