//! Render the landing page with a custom repository link.
//!
//! Run with: `cargo run --example render_page`

use cddf_site::{SiteConfig, render_site};

fn main() {
    let config = SiteConfig {
        repo_url: "https://github.com/example/cddf-fork".into(),
        ..Default::default()
    };

    let html = render_site(&config);

    let output_path = "cddf_page.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
