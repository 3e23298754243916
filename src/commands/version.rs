use anyhow::Result;

/// Run the version command - display version and build information
pub fn run() -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");

    println!("{} v{}", name, version);
    println!();
    println!("License: {}", env!("CARGO_PKG_LICENSE"));

    if let Some(hash) = option_env!("RECIPEBOOK_BUILD_HASH") {
        println!("Build: {}", hash);
    }

    Ok(())
}
