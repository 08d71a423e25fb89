mod app;
mod catalog;
mod chrome;
mod config;
mod router;
mod runtime;
mod ui;
mod view;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
