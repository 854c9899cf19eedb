//! `winding ratings`: standard power ratings.

use anyhow::Result;
use winding_core::standard_ratings;

pub fn run() -> Result<()> {
    println!("Standard ratings:");
    println!();
    for rating in standard_ratings() {
        println!("  {}", rating.label());
    }
    Ok(())
}
