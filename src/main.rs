use anyhow::Result;
use env_logger::Env;

fn main() -> Result<()> {
    // Default to info so the per-file lines show up without RUST_LOG.
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("Generating tomato app icons...");
    iconsmith::render::run()?;
    println!("Done! Rebuild the app in Xcode.");

    Ok(())
}
