//! Build script for tanu-site
//!
//! - Stamps `BUILD_VERSION` (git short hash, else build time) for cache busting
//! - Picks the stylesheet the document links: `site.css` in debug builds,
//!   a lightningcss-minified `site.min.css` in release builds

use std::path::Path;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const CSS_DIR: &str = "public/css";

fn main() {
    println!("cargo:rerun-if-changed={CSS_DIR}");
    println!("cargo:rerun-if-changed=../../.git/HEAD");

    println!("cargo:rustc-env=BUILD_VERSION={}", build_version());

    let release = std::env::var("PROFILE").is_ok_and(|profile| profile == "release");
    let stylesheet = if release {
        minified_stylesheet().unwrap_or("site.css")
    } else {
        "site.css"
    };
    println!("cargo:rustc-env=SITE_STYLESHEET={stylesheet}");
}

fn build_version() -> String {
    Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or_else(|_| "unknown".to_string(), |d| format!("{:x}", d.as_secs()))
        })
}

/// Writes `site.min.css` next to `site.css`. `None` leaves the unminified
/// sheet in use.
fn minified_stylesheet() -> Option<&'static str> {
    use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

    let css_dir = Path::new(CSS_DIR);
    let source = std::fs::read_to_string(css_dir.join("site.css")).ok()?;

    let mut sheet = StyleSheet::parse(&source, ParserOptions::default()).ok()?;
    sheet.minify(MinifyOptions::default()).ok()?;
    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .ok()?;

    std::fs::write(css_dir.join("site.min.css"), printed.code).ok()?;
    Some("site.min.css")
}
