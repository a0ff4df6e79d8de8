use serde_json::Value;

/// Text coercion for untyped event fields.
///
/// Strings are taken as-is, numbers and booleans render as their JSON text,
/// and anything else (`null`, objects, arrays, `None`) becomes `""`.
pub trait RawText {
    fn raw_text(&self) -> String;
}

impl RawText for str {
    fn raw_text(&self) -> String {
        self.to_string()
    }
}

impl RawText for String {
    fn raw_text(&self) -> String {
        self.clone()
    }
}

impl RawText for Value {
    fn raw_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
        }
    }
}

impl<T: RawText> RawText for Option<T> {
    fn raw_text(&self) -> String {
        self.as_ref().map(RawText::raw_text).unwrap_or_default()
    }
}

impl<T: RawText + ?Sized> RawText for &T {
    fn raw_text(&self) -> String {
        (**self).raw_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_render_as_text() {
        assert_eq!(json!("abc").raw_text(), "abc");
        assert_eq!(json!(42).raw_text(), "42");
        assert_eq!(json!(true).raw_text(), "true");
    }

    #[test]
    fn non_scalars_are_empty() {
        assert_eq!(Value::Null.raw_text(), "");
        assert_eq!(json!({"type": "x"}).raw_text(), "");
        assert_eq!(json!(["x"]).raw_text(), "");
        assert_eq!(None::<&str>.raw_text(), "");
    }
}
