//! List rules command implementation.

use jstyle_core::Rule;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<26} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in Rule::ALL {
        println!(
            "{:<8} {:<26} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nUse --rules to report only some rules, e.g.:");
    println!("  jstyle check --rules method-naming,operator-spacing");
    println!("  jstyle check --rules JS102,JS306");
}
