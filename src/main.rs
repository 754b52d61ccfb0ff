//! luau-build - package a Luau source tree
//!
//! `luau-build <source|bundle|rbxm> <file-name>`

use clap::Parser;

use luau_build::cli::BuildCli;
use luau_build::commands;
use luau_build::ui;

fn main() {
    let cli = BuildCli::parse();

    if let Err(e) = commands::build::run(cli) {
        ui::report_error(&e);
        std::process::exit(1);
    }
}
