use anyhow::Result;

/// The application proper lives in the library and starts from the
/// `wasm_bindgen(start)` entry point; this binary only keeps host
/// builds honest.
fn main() -> Result<()> {
    println!("storefront-frontend targets wasm32; build it with trunk serve or trunk build.");
    Ok(())
}
