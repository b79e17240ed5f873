//! Error handling example for jpregion-rs
//!
//! Lookups never fail: malformed ids, unknown ids and missing datasets come
//! back as `None` or empty maps. Errors only surface when reading a source
//! directly.

use jpregion_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== jpregion-rs Error Handling Example ===\n");

    let repo = RegionRepository::new();

    // Example 1: Malformed and unknown ids
    println!("--- Example 1: Ids that resolve to nothing ---");
    for id in ["JP", "", "JP-99", "jp-13"] {
        match repo.get(id, None) {
            Some(region) => println!("  Found: {region}"),
            None => println!("  Not found: {id:?}"),
        }
    }
    println!();

    // Example 2: Scopes without data
    println!("--- Example 2: Scopes without data ---");
    println!("  US regions: {}", repo.get_all("US", None, None).len());
    println!("  Below JP-13: {}", repo.get_list("JP", Some("JP-13"), None).len());
    println!();

    // Example 3: Reading a source directly surfaces the error
    println!("--- Example 3: Direct source access ---");
    let source = JsonFileSource::new("/nonexistent");
    match source.read_definitions(&Scope::root("JP")) {
        Ok(set) => println!("  Loaded {} regions", set.len()),
        Err(e) => println!("  ✗ {e}"),
    }

    // The shipped dataset loads fine, so `?` passes here.
    let set = JsonFileSource::default().read_definitions(&Scope::root("JP"))?;
    println!("  ✓ Shipped dataset: {} regions", set.len());

    Ok(())
}
