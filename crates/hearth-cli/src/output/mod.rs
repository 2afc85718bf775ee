//! Structured output: JSON rendering and the aligned table used by
//! `--format table`.

use serde::Serialize;

pub mod table;

/// Render a serializable value as pretty JSON (`--format json`).
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn render_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render_json;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        percent: f64,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            id: "prj-1",
            percent: 50.0,
        };
        let out = render_json(&value).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "prj-1");
        assert_eq!(parsed["percent"], 50.0);
    }
}
