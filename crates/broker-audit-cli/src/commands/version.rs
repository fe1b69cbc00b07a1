//! Version command implementation.

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_BIN_NAME");

pub fn run() {
    println!("{NAME} {VERSION}");
    println!();
    println!("Inspect and audit Kafka/ZooKeeper deployment output.");
    println!();
    println!("Build info:");
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
}
