mod app;
mod content;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::content::PortfolioContent;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file overriding the built-in portfolio content.
    #[arg(long)]
    content: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let content = match &args.content {
        Some(path) => match PortfolioContent::from_file(path) {
            Ok(content) => content,
            Err(error) => {
                eprintln!("skillfolio: {error:#}");
                return ExitCode::FAILURE;
            }
        },
        None => PortfolioContent::builtin(),
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1180.0, 880.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "skillfolio",
        options,
        Box::new(move |cc| Ok(Box::new(app::PortfolioApp::new(cc, content)))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("skillfolio: {error}");
            ExitCode::FAILURE
        }
    }
}
