//! Field descriptor registry.
//!
//! Every form control of the editor is keyed by a qualified field name such as
//! `request.headers`. Names starting with `_` are optional-section flags: the
//! unprefixed field they guard is only exported while the flag is set.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Prefix marking an optional-section flag field.
pub const FLAG_PREFIX: char = '_';

/// Quick-pick status codes offered as radio buttons.
pub const STATUS_CHOICES: [&str; 3] = ["200", "404", "500"];

/// Radio value of the "custom status" choice.
pub const CUSTOM_CHOICE: &str = "custom";

/// Value stored for one field of a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    /// Flags are truthy when set, texts when non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => *flag,
            FieldValue::Text(text) => !text.is_empty(),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Flag(flag) => flag.to_string(),
            FieldValue::Text(text) => text.clone(),
        }
    }

    /// Lenient conversion used when restoring snapshots written by hand or by
    /// older editors: numbers become text, `null` becomes empty text.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(FieldValue::Flag(*flag)),
            Value::String(text) => Some(FieldValue::Text(text.clone())),
            Value::Number(number) => Some(FieldValue::Text(number.to_string())),
            Value::Null => Some(FieldValue::Text(String::new())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

/// Presentation-neutral state of one form control.
///
/// The frontend binds its inputs to these values; the descriptors read from
/// and write to them without touching the DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Control {
    /// Text content of an input or textarea, or the companion free-text input
    /// of a radio group.
    pub text: String,
    /// Checkbox state.
    pub checked: bool,
    /// Error indicator (`is-danger`) of a JSON text area.
    pub invalid: bool,
    /// Selected radio value.
    pub selected: Option<String>,
    /// Value carried by the custom radio choice.
    pub custom: String,
}

/// The closed set of control behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Boolean,
    /// Radio group of quick-pick values plus a custom choice mirrored into a
    /// free-text input. Used for the response status code.
    RadioWithOverride,
    /// Text area holding JSON that is pretty-printed whenever it is written.
    JsonFormatted,
}

impl FieldKind {
    pub fn read(self, control: &Control) -> FieldValue {
        match self {
            FieldKind::Text | FieldKind::JsonFormatted => FieldValue::Text(control.text.clone()),
            FieldKind::Boolean => FieldValue::Flag(control.checked),
            FieldKind::RadioWithOverride => match control.selected.as_deref() {
                Some(CUSTOM_CHOICE) => FieldValue::Text(control.custom.clone()),
                Some(choice) => FieldValue::Text(choice.to_string()),
                None => FieldValue::Text(String::new()),
            },
        }
    }

    pub fn write(self, control: &mut Control, value: &FieldValue) {
        match self {
            FieldKind::Text => control.text = value.as_text(),
            FieldKind::Boolean => control.checked = value.is_truthy(),
            FieldKind::RadioWithOverride => {
                let target = value.as_text();
                if STATUS_CHOICES.contains(&target.as_str()) {
                    control.selected = Some(target);
                } else {
                    control.selected = Some(CUSTOM_CHOICE.to_string());
                    control.custom = target.clone();
                    control.text = target;
                }
            }
            FieldKind::JsonFormatted => {
                let raw = value.as_text();
                if raw.is_empty() {
                    control.text.clear();
                    control.invalid = false;
                    return;
                }
                match format_json(&raw) {
                    Ok(pretty) => {
                        control.text = pretty;
                        control.invalid = false;
                    }
                    Err(_) => {
                        control.text = raw;
                        control.invalid = true;
                    }
                }
            }
        }
    }
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Default text; ignored for boolean fields, which default to `false`.
    pub default: &'static str,
    /// Whether an adjacent control is shown only while this field is checked.
    pub adjacent: bool,
}

impl FieldDescriptor {
    const fn new(name: &'static str, kind: FieldKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            default,
            adjacent: false,
        }
    }

    const fn flag(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Boolean,
            default: "",
            adjacent: true,
        }
    }

    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Boolean => FieldValue::Flag(false),
            _ => FieldValue::Text(self.default.to_string()),
        }
    }

    pub fn is_flag(&self) -> bool {
        self.name.starts_with(FLAG_PREFIX)
    }

    /// Passes a value through this field's control and back, which is what
    /// gets stored when the user edits the control: JSON is re-indented when
    /// valid, booleans are coerced.
    pub fn normalize(&self, value: &FieldValue) -> FieldValue {
        let mut control = Control::default();
        self.kind.write(&mut control, value);
        self.kind.read(&control)
    }

    /// Value to store once the user committed an edit of `control`.
    ///
    /// `None` while a radio group has no value yet, e.g. the custom status
    /// choice was picked before any code was typed.
    pub fn commit(&self, control: &Control) -> Option<FieldValue> {
        let value = self.kind.read(control);
        if self.kind == FieldKind::RadioWithOverride && !value.is_truthy() {
            return None;
        }
        Some(self.normalize(&value))
    }
}

pub const FIELDS: [FieldDescriptor; 11] = [
    // request
    FieldDescriptor::new("request.route", FieldKind::Text, ""),
    FieldDescriptor::new("request.method", FieldKind::Text, "get"),
    FieldDescriptor::new("request.headers", FieldKind::JsonFormatted, ""),
    FieldDescriptor::new("request.payload", FieldKind::JsonFormatted, ""),
    FieldDescriptor::flag("_request.headers"),
    FieldDescriptor::flag("_request.payload"),
    // response
    FieldDescriptor::new("response.status", FieldKind::RadioWithOverride, "200"),
    FieldDescriptor::new("response.headers", FieldKind::JsonFormatted, ""),
    FieldDescriptor::new("response.data", FieldKind::JsonFormatted, ""),
    FieldDescriptor::flag("_response.headers"),
    FieldDescriptor::flag("_response.data"),
];

/// Fields seeded into the record of every new tab.
pub const SEEDED_FIELDS: [&str; 2] = ["request.method", "response.status"];

pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|field| field.name == name)
}

/// Data field guarded by an optional-section flag, e.g. `_request.headers`
/// guards `request.headers`.
pub fn flag_target(name: &str) -> Option<&str> {
    name.strip_prefix(FLAG_PREFIX)
}

/// Serializes with a stable 4-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Re-indents a JSON document.
pub fn format_json(text: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    to_pretty_json(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_json_preserves_value() {
        let inputs = [
            r#"{"a":1,"b":[true,null,"x"]}"#,
            "[]",
            "  42 ",
            r#""text""#,
            r#"{"nested":{"deep":{"k":-1.5e3}}}"#,
        ];
        for input in inputs {
            let formatted = format_json(input).unwrap();
            let direct: Value = serde_json::from_str(input).unwrap();
            let reparsed: Value = serde_json::from_str(&formatted).unwrap();
            assert_eq!(direct, reparsed, "input: {}", input);
        }
    }

    #[test]
    fn test_format_json_uses_four_spaces() {
        assert_eq!(format_json(r#"{"a":1}"#).unwrap(), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_json_field_write() {
        let kind = FieldKind::JsonFormatted;
        let mut control = Control::default();

        kind.write(&mut control, &"{bad".into());
        assert_eq!(control.text, "{bad");
        assert!(control.invalid);

        kind.write(&mut control, &r#"{"ok":true}"#.into());
        assert_eq!(control.text, "{\n    \"ok\": true\n}");
        assert!(!control.invalid);

        kind.write(&mut control, &"".into());
        assert_eq!(control.text, "");
        assert!(!control.invalid);
    }

    #[test]
    fn test_status_radio_write() {
        let kind = FieldKind::RadioWithOverride;
        let mut control = Control::default();

        kind.write(&mut control, &"404".into());
        assert_eq!(control.selected.as_deref(), Some("404"));
        assert_eq!(kind.read(&control), FieldValue::from("404"));

        kind.write(&mut control, &"418".into());
        assert_eq!(control.selected.as_deref(), Some(CUSTOM_CHOICE));
        assert_eq!(control.custom, "418");
        assert_eq!(control.text, "418");
        assert_eq!(kind.read(&control), FieldValue::from("418"));
    }

    #[test]
    fn test_boolean_write_coerces() {
        let kind = FieldKind::Boolean;
        let mut control = Control::default();
        kind.write(&mut control, &"yes".into());
        assert!(control.checked);
        kind.write(&mut control, &false.into());
        assert!(!control.checked);
        assert_eq!(kind.read(&control), FieldValue::Flag(false));
    }

    #[test]
    fn test_normalize() {
        let headers = descriptor("request.headers").unwrap();
        assert_eq!(
            headers.normalize(&r#"{"a": 1}"#.into()),
            FieldValue::from("{\n    \"a\": 1\n}")
        );
        assert_eq!(headers.normalize(&"{bad".into()), FieldValue::from("{bad"));

        let flag = descriptor("_response.data").unwrap();
        assert_eq!(flag.normalize(&"x".into()), FieldValue::Flag(true));
    }

    #[test]
    fn test_commit() {
        let status = descriptor("response.status").unwrap();
        let custom_without_code = Control {
            selected: Some(CUSTOM_CHOICE.to_string()),
            ..Control::default()
        };
        assert_eq!(status.commit(&custom_without_code), None);

        let custom_with_code = Control {
            selected: Some(CUSTOM_CHOICE.to_string()),
            custom: "418".to_string(),
            ..Control::default()
        };
        assert_eq!(status.commit(&custom_with_code), Some(FieldValue::from("418")));

        let headers = descriptor("request.headers").unwrap();
        let edited = Control {
            text: r#"{ "a" :1 }"#.to_string(),
            ..Control::default()
        };
        assert_eq!(
            headers.commit(&edited),
            Some(FieldValue::from("{\n    \"a\": 1\n}"))
        );
        // clearing a text field is stored
        assert_eq!(headers.commit(&Control::default()), Some(FieldValue::from("")));
    }

    #[test]
    fn test_registry() {
        assert_eq!(descriptor("request.method").unwrap().default, "get");
        assert_eq!(descriptor("response.status").unwrap().default, "200");
        assert!(descriptor("request.unknown").is_none());
        for field in FIELDS.iter().filter(|f| f.is_flag()) {
            assert!(field.adjacent);
            let target = flag_target(field.name).unwrap();
            assert!(descriptor(target).is_some(), "{} has no target", field.name);
        }
    }

    #[test]
    fn test_field_value_from_json() {
        assert_eq!(
            FieldValue::from_json(&serde_json::json!(404)),
            Some(FieldValue::from("404"))
        );
        assert_eq!(
            FieldValue::from_json(&serde_json::json!(true)),
            Some(FieldValue::Flag(true))
        );
        assert_eq!(FieldValue::from_json(&serde_json::json!([1])), None);
    }
}
