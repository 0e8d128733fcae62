//! Header-map snapshots for log events.

use axum::http::HeaderMap;
use serde_json::{Map, Value};

/// Renders a header map as a JSON object of name to value.
///
/// Non-UTF-8 values are rendered lossily; repeated headers keep the last
/// value.
pub fn headers_to_json(headers: &HeaderMap) -> Value {
    let mut map = Map::new();
    for (name, value) in headers {
        let rendered = match value.to_str() {
            Ok(text) => text.to_owned(),
            Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
        };
        map.insert(name.as_str().to_owned(), Value::String(rendered));
    }

    Value::Object(map)
}
