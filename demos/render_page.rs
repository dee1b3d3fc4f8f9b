//! Render the landing page to a file.
//!
//! Run with: `cargo run --example render_page`

use rta_landing::clock::SystemClock;
use rta_landing::render_page;
use rta_landing::types::PageOptions;

fn main() {
    // The published default variant: no CTA panel, plain member logos
    let options = PageOptions::default();

    let html = render_page(&options, &SystemClock);

    let output_path = "index.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
