//! CLI definitions using clap derive API
//!
//! Positional arguments are optional at the clap level: the commands report
//! missing or unknown values themselves so both binaries keep their
//! `<type> <args...>` shape.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser};
use std::path::PathBuf;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default())
}

/// Options shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Project root (defaults to current directory). luau-convert SOURCE and
    /// DESTINATION stay relative to the current directory
    #[arg(long, short = 'C', value_name = "DIR", env = "LUAU_BUILD_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (defaults to <ROOT>/luau-build.yaml)
    #[arg(long, short = 'c', value_name = "FILE", env = "LUAU_BUILD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// luau-build - package a Luau source tree
#[derive(Parser, Debug)]
#[command(
    name = "luau-build",
    author,
    version,
    styles = styles(),
    about = "Package a Luau source tree as a zip, a darklua bundle or a rojo model",
    after_help = "\x1b[1m\x1b[32mBuild types:\x1b[0m\n    \
                  source    zip the source tree into <OUT_DIR>/<FILE_NAME>\n    \
                  bundle    bundle the tree into one file with darklua\n    \
                  rbxm      compile a binary model with rojo\n\n\
                  \x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  luau-build source MyLib.zip\n    \
                  luau-build bundle MyLib.luau\n    \
                  luau-build rbxm MyLib.rbxm"
)]
pub struct BuildCli {
    /// Build type: source, bundle or rbxm
    #[arg(value_name = "BUILD_TYPE")]
    pub build_type: Option<String>,

    /// Output file name, written to the output directory
    #[arg(value_name = "FILE_NAME")]
    pub file_name: Option<String>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// luau-convert - rewrite requires in a Luau source tree
#[derive(Parser, Debug)]
#[command(
    name = "luau-convert",
    author,
    version,
    styles = styles(),
    about = "Rewrite @self requires, or convert requires to Roblox instance paths",
    after_help = "\x1b[1m\x1b[32mConvert types:\x1b[0m\n    \
                  remove_self    rewrite require(\"@self...\") to relative requires\n    \
                  rblx_require   convert requires with darklua and a rojo source map\n\n\
                  \x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  luau-convert remove_self src out\n    \
                  luau-convert rblx_require src rblx-src"
)]
pub struct ConvertCli {
    /// Convert type: rblx_require or remove_self
    #[arg(value_name = "CONVERT_TYPE")]
    pub convert_type: Option<String>,

    /// Source directory
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Destination directory
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

    #[command(flatten)]
    pub global: GlobalArgs,
}
