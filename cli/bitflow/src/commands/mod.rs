//! Command implementations.

pub mod boards;
pub mod build;
pub mod clean;
pub mod doctor;
pub mod flags;
pub mod init;

use bitflow_config::{Notice, Severity};

/// Print resolution notices the way the rest of the CLI reports:
/// informational notes to stdout, warnings to stderr.
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.severity {
            Severity::Info => println!("note: {}", notice.message),
            Severity::Warning => eprintln!("warning: {}", notice.message),
        }
    }
}
