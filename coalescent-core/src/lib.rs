//! Lineage relabeling for Hudson-style coalescent simulation.
//!
//! [`CoalescentRelabeler`] owns the compacting array of active lineage labels.
//! Each [`CoalescentRelabeler::step`] merges two uniformly drawn lineages into
//! a fresh ancestral label and shrinks the active window by one slot, until a
//! single root lineage remains.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod event;
mod invariants;
mod label;
mod ledger;
#[cfg(all(test, feature = "rand"))]
mod property;
mod relabeler;
mod source;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DEFAULT_MAX_REDRAWS, RelabelerBuilder},
    error::{
        LedgerViolation, LedgerViolationCode, RelabelError, RelabelErrorCode, Result,
        SourceViolation, SourceViolationCode,
    },
    event::CoalescenceEvent,
    invariants::InvariantViolation,
    label::Label,
    ledger::LineageLedger,
    relabeler::CoalescentRelabeler,
    source::IndexSource,
};

#[cfg(feature = "rand")]
pub use crate::source::RngIndexSource;
