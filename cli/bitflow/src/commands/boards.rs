//! `bitflow boards` — board capability registry views.

use anyhow::Result;

use bitflow_config::{builtin_boards, lookup_board, usm_capable};

/// List the registered board descriptors.
pub fn list() -> Result<()> {
    println!("Registered boards:");
    for board in builtin_boards() {
        println!(
            "  {:<30} usm={:<5} {}",
            board.id, board.usm_capable, board.description
        );
    }
    println!();
    println!("Other descriptors are accepted; USM capability is then derived");
    println!("from the 'usm' marker in the variant part of the descriptor.");
    Ok(())
}

/// Describe one board descriptor, registered or not.
pub fn describe(id: &str) -> Result<()> {
    match lookup_board(id) {
        Some(board) => {
            println!("Board:       {}", board.id);
            println!("Description: {}", board.description);
            println!("USM capable: {}", board.usm_capable);
        }
        None => {
            println!("Board:       {id} (not registered)");
            println!("USM capable: {} (derived from naming convention)", usm_capable(id));
        }
    }
    Ok(())
}
