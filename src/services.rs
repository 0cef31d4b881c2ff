//! SRP snippet: each type has a single reason to change.
//!
//! `ProductBloc` knows *when* products are loaded, saved and announced, but
//! not *how*. The how lives behind the `ProductService` and `MailerService`
//! traits, so the console stand-ins below can be swapped for a database or an
//! SMTP client without touching the bloc.

use serde::{Deserialize, Serialize};

use crate::console::Console;
use crate::error::ValidationResult;
use crate::validator::FieldValidator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
}

impl CatalogItem {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductService {
    fn get_product(&self, id: u32) -> CatalogItem;
    fn save_product(&self, product: &CatalogItem);
}

#[cfg_attr(test, mockall::automock)]
pub trait MailerService {
    fn notify_clients(&self);
}

/// Prints what a real product store would do.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProductService {
    console: Console,
}

impl ConsoleProductService {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl ProductService for ConsoleProductService {
    fn get_product(&self, id: u32) -> CatalogItem {
        let product = CatalogItem::new(id, "OLED Tv");
        self.console
            .line(format!("Product: {{ id: {}, name: {:?} }}", product.id, product.name));
        product
    }

    fn save_product(&self, product: &CatalogItem) {
        self.console.line(format!(
            "Saving to database: {{ id: {}, name: {:?} }}",
            product.id, product.name
        ));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMailer {
    console: Console,
}

impl ConsoleMailer {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl MailerService for ConsoleMailer {
    fn notify_clients(&self) {
        self.console.line("Sending mail to clients");
    }
}

pub struct ProductBloc<P, M> {
    product_service: P,
    mailer_service: M,
}

impl<P: ProductService, M: MailerService> ProductBloc<P, M> {
    pub fn new(product_service: P, mailer_service: M) -> Self {
        Self {
            product_service,
            mailer_service,
        }
    }

    pub fn load_product(&self, id: u32) -> CatalogItem {
        tracing::debug!(id, "loading product");
        self.product_service.get_product(id)
    }

    /// Rejects incomplete products before they reach the store.
    pub fn save_product(&self, product: &CatalogItem) -> ValidationResult<()> {
        FieldValidator::new().check_value(product)?;
        tracing::debug!(id = product.id, "saving product");
        self.product_service.save_product(product);
        Ok(())
    }

    pub fn notify_clients(&self) {
        self.mailer_service.notify_clients();
    }
}

#[derive(Debug, Clone, Default)]
pub struct CartBloc {
    items_in_cart: Vec<u32>,
}

impl CartBloc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_add_to_cart(&mut self, product_id: u32) {
        tracing::info!(product_id, "adding product to cart");
        self.items_in_cart.push(product_id);
    }

    pub fn items(&self) -> &[u32] {
        &self.items_in_cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use mockall::predicate::eq;

    #[test]
    fn test_load_product_delegates_once() {
        let mut products = MockProductService::new();
        products
            .expect_get_product()
            .with(eq(10))
            .times(1)
            .returning(|id| CatalogItem::new(id, "OLED Tv"));
        let mailer = MockMailerService::new();

        let bloc = ProductBloc::new(products, mailer);
        assert_eq!(bloc.load_product(10), CatalogItem::new(10, "OLED Tv"));
    }

    #[test]
    fn test_save_product_delegates_once() {
        let mut products = MockProductService::new();
        products
            .expect_save_product()
            .withf(|item| item.id == 10 && item.name == "OLED TV")
            .times(1)
            .return_const(());

        let bloc = ProductBloc::new(products, MockMailerService::new());
        assert!(bloc.save_product(&CatalogItem::new(10, "OLED TV")).is_ok());
    }

    #[test]
    fn test_incomplete_product_never_reaches_store() {
        let mut products = MockProductService::new();
        products.expect_save_product().times(0);

        let bloc = ProductBloc::new(products, MockMailerService::new());
        assert_eq!(
            bloc.save_product(&CatalogItem::new(0, "OLED TV")),
            Err(ValidationError::missing_field("id"))
        );
        assert_eq!(
            bloc.save_product(&CatalogItem::new(7, "")),
            Err(ValidationError::missing_field("name"))
        );
    }

    #[test]
    fn test_notify_clients_uses_mailer_only() {
        let mut mailer = MockMailerService::new();
        mailer.expect_notify_clients().times(1).return_const(());
        let products = MockProductService::new();

        let bloc = ProductBloc::new(products, mailer);
        bloc.notify_clients();
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut cart = CartBloc::new();
        assert!(cart.items().is_empty());
        cart.on_add_to_cart(10);
        cart.on_add_to_cart(3);
        cart.on_add_to_cart(10);
        assert_eq!(cart.items(), &[10, 3, 10]);
    }

    #[test]
    fn test_console_service_returns_requested_id() {
        let service = ConsoleProductService::new(Console::new(false));
        assert_eq!(service.get_product(42).id, 42);
    }
}
