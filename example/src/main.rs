use quill::{Engine, Options};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;


mod templates {
    quill::str!("hello_first_last", r#"
        <p>Hello {{firstname}} {{lastname}}</p>
    "#);
    quill::str!("button", r#"<button id="todo-{{id}}">{% upper %}{{label}}{% endupper %}</button>"#);
}

/// Registers the tags used by the demo templates
pub fn demo_engine() -> Engine {
    let options = Options::from_json(r#"{"site": "todo.example"}"#).unwrap_or_default();
    let site = options
        .get("site")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let engine = Engine::with_options(options);
    engine.register_tag("upper", |_, _, body| Ok(body.unwrap_or_default().to_uppercase()));
    engine.register_tag("site", move |_, _, _| Ok(site.clone()));
    engine
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = demo_engine();

    let html = templates::button(&engine).render(&json!({"id": 42, "label": "My Todo"}))?;
    println!("{}", html);

    let html2 = templates::hello_first_last(&engine)
        .render(&json!({"firstname": "King", "lastname": "Tubby"}))?;
    println!("{}", html2);

    let html3 = engine.render("<footer>{% site %}{# todo: year #}</footer>", &json!({}))?;
    println!("{}", html3);
    Ok(())
}
