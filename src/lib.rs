//! # Clean Code Principles in Rust
//!
//! Small, self-contained snippets for three design principles:
//!
//! ## DRY: Don't Repeat Yourself
//! - A `Record` is an ordered list of named values
//! - Any `Serialize` struct becomes a `Record` without naming its fields
//! - `FieldValidator` checks every field by its kind, not by its name
//! - `Product::summary` reuses the validator instead of repeating checks
//!
//! ## SRP: Single Responsibility
//! - `ProductService` fetches and stores products
//! - `MailerService` talks to clients
//! - `ProductBloc` only wires the two together
//! - `CartBloc` only tracks the cart
//!
//! ## Composition over Inheritance
//! - `InputElement` owns an `HtmlElement`, `InputAttributes` and `InputEvents`
//! - Each part is validated on its own with the same `FieldValidator`
//!
//! Run snippets with: `cargo run --bin <name>`

pub mod config;
pub mod console;
pub mod error;
pub mod html;
pub mod product;
pub mod record;
mod ser;
pub mod services;
pub mod validator;

pub use error::{ConfigError, RecordError, ValidationError, ValidationResult};
pub use record::{Record, Value, ValueKind};
pub use validator::FieldValidator;
