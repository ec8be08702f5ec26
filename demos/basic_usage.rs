// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_karatsuba::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Radix Karatsuba Example ===\n");

    // Karatsuba with the default cutoff, events logged through tracing
    let multiplier = RadixMultiplier::new(
        Box::new(Karatsuba::default()),
        Arc::new(LoggingEventHandler),
    );

    println!("Using {} multiplication\n", multiplier.algorithm_name());

    let cases = [
        (10, "9999999999", "9999999999"),
        (2, "101", "110"),
        (16, "FF", "FF"),
        (10, "1.5", "2"),
        (36, "Z", "Z"),
        (10, "123.4", "5.67"),
        (16, "0.8", "2"),
    ];

    for (base, lhs, rhs) in cases {
        match multiplier.multiply(base, lhs, rhs) {
            Ok(product) => println!("  base {:>2}: {} x {} = {}", base, lhs, rhs, product),
            Err(e) => println!("  base {:>2}: {} x {} failed: {}", base, lhs, rhs, e),
        }
    }

    // Invalid input is reported, not panicked on
    println!("\nRejected inputs:");
    for (base, lhs, rhs) in [(8, "19", "2"), (10, "1.2.3", "4"), (40, "1", "1")] {
        if let Err(e) = multiplier.multiply(base, lhs, rhs) {
            println!("  base {:>2}: {} x {} -> {}", base, lhs, rhs, e);
        }
    }

    // Builder with fork-join for long operands
    let parallel = RadixMultiplierBuilder::new()
        .karatsuba(16)
        .parallel_threshold(256)
        .build(Arc::new(NoOpEventHandler))
        .expect("valid configuration");

    let nines = "9".repeat(2000);
    let product = parallel
        .multiply(10, &nines, &nines)
        .expect("valid operands");

    println!(
        "\n{}: (10^2000 - 1)^2 has {} digits",
        parallel.algorithm_name(),
        product.len()
    );

    println!("\n=== Example Complete ===");
}
