//! `vrwv rules` – list the admission pipeline.

use vrwv_core::admission::default_policy;

pub fn run_rules() {
    let policy = default_policy();
    println!("normalization steps:");
    for (i, step) in policy.normalizer().steps().iter().enumerate() {
        println!("  {}. {}", i + 1, step.name);
    }
    println!("admission rules:");
    for (i, rule) in policy.rules().rules().iter().enumerate() {
        println!("  {}. {:<13} {}", i + 1, rule.name(), rule.pattern());
    }
}
