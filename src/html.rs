//! Composition snippet: an input element built from small parts instead of a
//! class hierarchy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::validator::FieldValidator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlType {
    Input,
    Select,
    Textarea,
    Radio,
}

impl fmt::Display for HtmlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HtmlType::Input => "input",
            HtmlType::Select => "select",
            HtmlType::Textarea => "textarea",
            HtmlType::Radio => "radio",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlElement {
    pub id: String,
    #[serde(rename = "type")]
    pub html_type: HtmlType,
}

impl HtmlElement {
    pub fn new(id: impl Into<String>, html_type: HtmlType) -> Self {
        Self {
            id: id.into(),
            html_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputAttributes {
    pub placeholder: String,
    pub value: String,
}

impl InputAttributes {
    pub fn new(placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: value.into(),
        }
    }
}

/// Event hooks of an input. They do nothing yet beyond tracing the call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputEvents;

impl InputEvents {
    pub fn set_focus(&self) {
        tracing::trace!("set_focus");
    }

    pub fn get_value(&self) {
        tracing::trace!("get_value");
    }

    pub fn is_active(&self) {
        tracing::trace!("is_active");
    }

    pub fn remove_value(&self) {
        tracing::trace!("remove_value");
    }
}

/// Flat description used to build an [`InputElement`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub html_type: HtmlType,
    pub placeholder: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputElement {
    pub html_element: HtmlElement,
    pub attributes: InputAttributes,
    pub events: InputEvents,
}

impl InputElement {
    pub fn new(spec: ElementSpec) -> Self {
        let ElementSpec {
            id,
            html_type,
            placeholder,
            value,
        } = spec;

        Self {
            html_element: HtmlElement::new(id, html_type),
            attributes: InputAttributes::new(placeholder, value),
            events: InputEvents,
        }
    }

    /// Validates each part on its own with the same validator.
    ///
    /// `events` holds no data and is not checked.
    pub fn check(&self) -> ValidationResult<bool> {
        let validator = FieldValidator::new();
        validator.check_value(&self.html_element)?;
        validator.check_value(&self.attributes)
    }
}

impl From<ElementSpec> for InputElement {
    fn from(spec: ElementSpec) -> Self {
        InputElement::new(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::record::ValueKind;

    fn name_field_spec() -> ElementSpec {
        ElementSpec {
            id: "txtName".to_string(),
            html_type: HtmlType::Input,
            placeholder: "Enter first name".to_string(),
            value: "Fernando".to_string(),
        }
    }

    #[test]
    fn test_element_is_composed_from_spec() {
        let name_field = InputElement::new(name_field_spec());
        assert_eq!(name_field.html_element, HtmlElement::new("txtName", HtmlType::Input));
        assert_eq!(
            name_field.attributes,
            InputAttributes::new("Enter first name", "Fernando")
        );
    }

    #[test]
    fn test_parts_pass_validation() {
        let name_field: InputElement = name_field_spec().into();
        assert!(name_field.check().unwrap());
    }

    #[test]
    fn test_empty_value_is_missing() {
        let mut spec = name_field_spec();
        spec.value.clear();
        let element = InputElement::new(spec);
        assert_eq!(element.check(), Err(ValidationError::missing_field("value")));
    }

    #[test]
    fn test_empty_id_is_reported_before_attributes() {
        let mut spec = name_field_spec();
        spec.id.clear();
        spec.placeholder.clear();
        let element = InputElement::new(spec);
        assert_eq!(element.check(), Err(ValidationError::missing_field("id")));
    }

    #[test]
    fn test_whole_element_has_nested_parts() {
        let element = InputElement::new(name_field_spec());
        let result = FieldValidator::new().check_value(&element);
        assert_eq!(
            result,
            Err(ValidationError::unsupported_kind("html_element", ValueKind::Map))
        );
    }

    #[test]
    fn test_html_type_serializes_lowercase() {
        let json = serde_json::to_value(HtmlElement::new("x", HtmlType::Textarea)).unwrap();
        assert_eq!(json, serde_json::json!({"id": "x", "type": "textarea"}));
        assert_eq!(HtmlType::Radio.to_string(), "radio");
    }

    #[test]
    fn test_event_hooks_are_callable() {
        let element = InputElement::new(name_field_spec());
        element.events.set_focus();
        element.events.get_value();
        element.events.is_active();
        element.events.remove_value();
    }
}
