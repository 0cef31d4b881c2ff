//! DRY snippet: a product that validates itself without naming its fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{ValidationError, ValidationResult};
use crate::validator::FieldValidator;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown size '{0}', expected one of S, M, L, XL, XXL")]
pub struct UnknownSize(pub String);

/// Sizes travel as their text form; parsing ignores case and surrounding
/// whitespace, and an empty string is `Unset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Size {
    #[default]
    Unset,
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Unset => "",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = UnknownSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" => Ok(Size::Unset),
            "S" => Ok(Size::S),
            "M" => Ok(Size::M),
            "L" => Ok(Size::L),
            "XL" => Ok(Size::XL),
            "XXL" => Ok(Size::XXL),
            _ => Err(UnknownSize(s.to_string())),
        }
    }
}

impl TryFrom<String> for Size {
    type Error = UnknownSize;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Size> for String {
    fn from(size: Size) -> Self {
        size.as_str().to_string()
    }
}

/// A product whose fields all have to be filled in before it can be shown.
///
/// `Default` gives the "nothing filled in" product: empty name, zero price,
/// unset size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, size: Size) -> Self {
        Self {
            name: name.into(),
            price,
            size,
        }
    }

    /// DRY version: one generic check over every field of `self`.
    pub fn is_product_ready(&self) -> ValidationResult<bool> {
        FieldValidator::new().check_value(self)
    }

    /// Renders `"{name} ({price}) , {size}"` once the product is ready.
    ///
    /// Validation failures are returned to the caller, never swallowed.
    pub fn summary(&self) -> ValidationResult<String> {
        self.is_product_ready()?;
        Ok(self.render())
    }

    /// The repetitive alternative: one hand-written check per field.
    ///
    /// Kept next to [`summary`](Self::summary) so both can be compared; a new
    /// field needs a new line here and nothing in the DRY version.
    pub fn summary_repeated(&self) -> ValidationResult<String> {
        if self.name.is_empty() {
            return Err(ValidationError::missing_field("name"));
        }
        // NaN-aware: NaN is not > 0, so it is missing too.
        if !(self.price > 0.0) {
            return Err(ValidationError::missing_field("price"));
        }
        if self.size == Size::Unset {
            return Err(ValidationError::missing_field("size"));
        }
        Ok(self.render())
    }

    fn render(&self) -> String {
        format!("{} ({}) , {}", self.name, self.price, self.size)
    }
}
