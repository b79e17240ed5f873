//! Basic usage example for jpregion-rs
//!
//! This example demonstrates how to:
//! - Look up a prefecture by id, with and without a locale
//! - List every prefecture of Japan
//! - Build a lightweight id -> name list for a select box

use jpregion_rs::prelude::*;

fn main() {
    println!("=== jpregion-rs Basic Usage Example ===\n");

    let repo = RegionRepository::new();

    // Example 1: Find a single region
    println!("--- Example 1: Get region by id ---");
    if let Some(tokyo) = repo.get("JP-13", None) {
        println!("Found: {}", tokyo.name());
        println!("Code: {}", tokyo.code());
        println!("Country: {}", tokyo.country_code());
    }
    if let Some(tokyo) = repo.get("JP-13", Some("en")) {
        println!("In English: {tokyo}");
    }
    println!();

    // Example 2: Every prefecture, in resource order
    println!("--- Example 2: All prefectures ---");
    let all = repo.get_all("JP", None, Some("en"));
    println!("Total prefectures: {}", all.len());
    for (i, region) in all.values().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, region.name(), region.id());
    }
    println!("... and {} more\n", all.len().saturating_sub(5));

    // Example 3: Names only
    println!("--- Example 3: Name list ---");
    let list = repo.get_list("JP", None, None);
    for (id, name) in list.iter().skip(44) {
        println!("{id}: {name}");
    }
}
