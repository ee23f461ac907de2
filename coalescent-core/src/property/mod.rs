//! Property-based tests for the coalescent relabeler.
//!
//! Runs complete coalescences for varied sample sizes, seeds, and draw styles
//! and checks label coverage, alive-set bookkeeping, and reproducibility of
//! a run from its recorded slot draws.

mod bookkeeping;
mod coverage;
mod determinism;
mod strategies;
mod types;
