//! Build script for pathman-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathman")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage which executables are visible on PATH")
        .long_about(
            "Keeps symlinks in a front and a back folder, plus a list of managed \
             directories, and composes a PATH that puts them before or after everything else",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("managed-folder")
                .long("managed-folder")
                .help("Override the managed folder location")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Override the configuration file location")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Create the managed folders and set up shell integration")
                .long_about("Create the managed folder with its front and back subfolders"),
            Command::new("add")
                .about("Add an executable (as a symlink) or a directory")
                .long_about("Symlink an executable into the front or back folder, or manage a directory"),
            Command::new("remove")
                .alias("rm")
                .about("Remove a symlink or a managed directory"),
            Command::new("rename").about("Rename a symlink"),
            Command::new("get").about("Show the priority of a symlink"),
            Command::new("set")
                .about("Change the priority of a symlink or managed directory")
                .long_about("Move a symlink to the other folder, or change a directory's priority"),
            Command::new("list")
                .alias("ls")
                .about("List managed symlinks and directories"),
            Command::new("summary")
                .about("Summarise the managed setup and report clashes")
                .long_about("Show folders, managed directories, and any name or PATH clashes"),
            Command::new("clean")
                .about("Remove broken symlinks and missing directories")
                .long_about("Scan for stale items, choose which to remove, and remove them"),
            Command::new("path")
                .about("Print the adjusted PATH")
                .long_about("Print the PATH with managed locations at the front and back"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
            Command::new("version").about("Print version information"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathman.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
