use clap::Parser;
use std::io;
use tabnav::Browser;

#[derive(Parser, Debug)]
#[command(name = "tabnav")]
#[command(about = "A browser history and tab simulator written in Rust")]
struct Args {
    /// Page to visit on startup
    page: Option<String>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut browser = Browser::new();
    if let Some(page) = args.page {
        log::info!("startup page: {}", page);
        browser.visit(&page);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = tabnav::ui::run(&mut browser, &mut stdin.lock(), &mut stdout.lock()) {
        // Output went away (closed pipe); there is nowhere left to report to.
        log::warn!("session ended early: {}", err);
    }
}
