//! Scan a photo tree and list its categories and albums.
//!
//! `RUST_LOG=warn cargo run --example scan_folder -- ~/Pictures`
use picasa_ini::{Catalog, PicasaError, ScanOptions};
use std::path::PathBuf;

fn main() -> Result<(), PicasaError> {
    env_logger::init();

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let catalog = Catalog::scan(&root, &ScanOptions::default())?;
    println!(
        "Parsed {} folders under '{}' ({} failed).",
        catalog.len(),
        root.display(),
        catalog.failures().len()
    );

    println!("\n--- Categories ---");
    for category in catalog.categories() {
        println!("{}", category);
    }

    println!("\n--- Albums ---");
    for (id, album) in catalog.album_index() {
        println!("{}:{}", id, album);
    }

    for (path, error) in catalog.failures() {
        eprintln!("Failed: {}: {}", path.display(), error);
    }
    Ok(())
}
