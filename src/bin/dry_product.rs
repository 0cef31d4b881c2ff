// DRY: Don't Repeat Yourself
// One generic validator replaces a hand-written check per product field.

use std::env;
use std::process::ExitCode;

use clean_code::config::DemoConfig;
use clean_code::console::{self, Console};
use clean_code::product::{Product, Size};
use clean_code::{FieldValidator, Record};

// =============================================================================
// Products from the config (default: the blue pants)
// =============================================================================

fn show_summaries(console: &Console, products: &[Product]) {
    console.heading("Product summaries");
    for product in products {
        match product.summary() {
            Ok(summary) => console.success(summary),
            Err(err) => console.failure(err),
        }
    }
}

// =============================================================================
// Same answer, two ways
// =============================================================================

fn compare_checks(console: &Console) {
    console.heading("DRY vs repeated checks");
    let shirt = Product::new("Shirt", 0.0, Size::M);
    console.line(format!("DRY:      {:?}", shirt.summary().map_err(|e| e.to_string())));
    console.line(format!(
        "Repeated: {:?}",
        shirt.summary_repeated().map_err(|e| e.to_string())
    ));
}

// =============================================================================
// Records without a struct behind them
// =============================================================================

fn check_records(console: &Console) {
    console.heading("Hand-built records");
    let validator = FieldValidator::new();
    let records = [
        Record::new()
            .with_field("name", "Shirt")
            .with_field("price", 5)
            .with_field("size", "M"),
        Record::new()
            .with_field("name", "Shirt")
            .with_field("price", 5)
            .with_field("size", "M")
            .with_field("tags", vec!["a", "b"]),
        Record::new()
            .with_field("name", "")
            .with_field("price", 0)
            .with_field("size", ""),
    ];

    for record in &records {
        console.line(record);
        match validator.check(record) {
            Ok(_) => console.success("ready"),
            Err(_) => console.report(&validator.report(record)),
        }
    }
}

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
    show_summaries(&console, &config.products);
    println!();
    compare_checks(&console);
    println!();
    check_records(&console);

    ExitCode::SUCCESS
}
