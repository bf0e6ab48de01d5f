//! CLI command handlers for `gradeprojector`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod project;
pub mod session;

use std::io::{self, Write};

/// Ask a yes/no question on stdin; anything but `y`/`yes` declines
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
