//! Data lookup and stringification
//!
//! Values are written the way string concatenation would write them: strings
//! as is, numbers without a trailing `.0`, arrays as comma separated elements
//! and objects as `[object Object]`.

use serde_json::{Number, Value};

/// Value of a top-level key, if the data is an object that owns it
///
/// Dotted names are not split: `user.name` is looked up as one key.
pub(crate) fn lookup<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.as_object()?.get(key)
}

fn write_number(number: &Number, out: &mut String) {
    if let Some(float) = number.as_f64().filter(|_| number.is_f64())
        && float.fract() == 0.0
        && float.abs() < 1e15
    {
        out.push_str(&(float as i64).to_string());
        return;
    }
    out.push_str(&number.to_string());
}

/// Appends the text form of `value` to `out`
pub fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::String(text) => out.push_str(text),
        Value::Number(number) => write_number(number, out),
        Value::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                if !item.is_null() {
                    write_value(item, out);
                }
            }
        }
        Value::Object(_) => out.push_str("[object Object]"),
    }
}

/// Text form of `value`
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}
