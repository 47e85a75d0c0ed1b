//! Demo showing the platform abstraction API

use bench_platform::platform;

fn main() -> anyhow::Result<()> {
    println!("=== Bench Platform Demo ===");

    let current_platform = bench_platform::current();
    println!("Platform: {}", current_platform.name());
    println!("Windows host: {}", platform::is_windows());
    println!("Home directory: {}", platform::home_dir()?.display());

    println!(
        "Normalized path: {}",
        platform::force_linux_path(r"results\run-1\output.xml")
    );

    if let Some(path) = std::env::var_os("PATH") {
        for dir in platform::split_path_env(&path) {
            println!("  search dir: {}", dir.display());
        }
    }

    Ok(())
}
