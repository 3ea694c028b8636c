use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct StudioInfo {
    pub email: String,
    pub mailing: Vec<String>,
    pub phone: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Message,
}

impl FieldKind {
    /// `type` attribute of the rendered `<input>`, `None` for a `<textarea>`.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Message => None,
            kind => Some(kind.into()),
        }
    }
}

/// A field of the enquiry form. The form has no client side validation,
/// `required` only drives the asterisk in the placeholder.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl FormField {
    pub fn placeholder(&self) -> String {
        if self.required {
            format!("{}*", self.label)
        } else {
            self.label.clone()
        }
    }
}

#[cfg(test)]
mod contact_tests {
    use super::{FieldKind, FormField};

    #[test]
    fn field_kind_maps_to_input_type() {
        assert_eq!(FieldKind::Text.input_type(), Some("text"));
        assert_eq!(FieldKind::Email.input_type(), Some("email"));
        assert_eq!(FieldKind::Tel.input_type(), Some("tel"));
        assert_eq!(FieldKind::Message.input_type(), None);
    }

    #[test]
    fn required_fields_are_starred() {
        let mut field = FormField {
            name: "phone".to_string(),
            label: "Phone".to_string(),
            kind: FieldKind::Tel,
            required: true,
        };
        assert_eq!(field.placeholder(), "Phone*");
        field.required = false;
        assert_eq!(field.placeholder(), "Phone");
    }
}
