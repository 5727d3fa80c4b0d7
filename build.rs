// Stamps the compile time into `BUILD_TIME` (RFC 3339, UTC) for the site footer.
fn main() {
    let built_at = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={built_at}");
    println!("cargo:rerun-if-changed=build.rs");
}
