//! luau-convert - rewrite requires in a Luau source tree
//!
//! `luau-convert <rblx_require|remove_self> <source> <destination>`

use clap::Parser;

use luau_build::cli::ConvertCli;
use luau_build::commands;
use luau_build::ui;

fn main() {
    let cli = ConvertCli::parse();

    if let Err(e) = commands::convert::run(cli) {
        ui::report_error(&e);
        std::process::exit(1);
    }
}
