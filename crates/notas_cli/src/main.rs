//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notas_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("notas_core ping={}", notas_core::ping());
    println!("notas_core version={}", notas_core::core_version());
}
