// Composition over inheritance
// An input element is assembled from parts, each with one job.

use std::env;
use std::process::ExitCode;

use clean_code::config::DemoConfig;
use clean_code::console::{self, Console};
use clean_code::html::InputElement;

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
    console.heading("Composition over inheritance");

    for spec in config.elements {
        let element = InputElement::new(spec);
        console.line(format!("{element:#?}"));

        element.events.set_focus();
        match element.check() {
            Ok(_) => console.success(format!("{} is ready", element.html_element.id)),
            Err(err) => console.failure(err),
        }
    }

    ExitCode::SUCCESS
}
