// SRP: Single Responsibility Principle
// The bloc coordinates; storage and mail are someone else's job.

use std::env;
use std::process::ExitCode;

use clean_code::config::DemoConfig;
use clean_code::console::{self, Console};
use clean_code::services::{CartBloc, CatalogItem, ConsoleMailer, ConsoleProductService, ProductBloc};

fn main() -> ExitCode {
    let config = match DemoConfig::from_args(env::args()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = console::init_tracing(&config.log_level) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let console = Console::new(config.color);
    console.heading("Single Responsibility");

    let product_service = ConsoleProductService::new(console);
    let mailer_service = ConsoleMailer::new(console);

    let product_bloc = ProductBloc::new(product_service, mailer_service);
    let mut cart_bloc = CartBloc::new();

    product_bloc.load_product(10);
    for item in [CatalogItem::new(10, "OLED TV"), CatalogItem::new(11, "")] {
        if let Err(err) = product_bloc.save_product(&item) {
            console.failure(err);
        }
    }
    product_bloc.notify_clients();

    cart_bloc.on_add_to_cart(10);
    console.line(format!("Cart: {:?}", cart_bloc.items()));

    ExitCode::SUCCESS
}
