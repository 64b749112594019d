//! mealpause main entrypoint.

use mealpause::run;
use mealpause::ui::messages::error;
use std::env;

fn main() {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module(
            "mealpause",
            match env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV)
                .unwrap_or_default()
                .as_str()
            {
                "debug" => log::LevelFilter::Debug,
                "info" => log::LevelFilter::Info,
                _ => log::LevelFilter::Warn,
            },
        )
        .init();

    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
