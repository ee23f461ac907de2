//! Error types for the coalescent relabeling core.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, num::NonZeroUsize};

use thiserror::Error;

use crate::label::Label;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A breach of the [`crate::IndexSource`] contract detected while drawing
/// slots.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SourceViolation {
    /// The source returned an index outside `[0, bound)`.
    #[error("index source returned {index} for bound {bound}")]
    OutOfRange {
        /// Index returned by the source.
        index: usize,
        /// Exclusive upper bound that was requested.
        bound: NonZeroUsize,
    },
    /// The source kept returning the first slot while drawing the second.
    #[error("index source returned slot {slot} on {attempts} consecutive redraws")]
    RedrawLimitExceeded {
        /// Slot that the source kept repeating.
        slot: usize,
        /// Number of redraws attempted before giving up.
        attempts: NonZeroUsize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SourceViolation`] variants.
    enum SourceViolationCode for SourceViolation {
        /// The source returned an index outside `[0, bound)`.
        OutOfRange => OutOfRange { .. } => "SOURCE_INDEX_OUT_OF_RANGE",
        /// The source kept returning the first slot while drawing the second.
        RedrawLimitExceeded => RedrawLimitExceeded { .. } => "SOURCE_REDRAW_LIMIT_EXCEEDED",
    }
}

/// Error type produced when constructing or stepping a
/// [`crate::CoalescentRelabeler`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RelabelError {
    /// A coalescent needs at least two sampled lineages.
    #[error("sample size must be at least 2 (got {got})")]
    InvalidSampleSize {
        /// The sample size supplied by the caller.
        got: usize,
    },
    /// The redraw limit must allow at least one redraw.
    #[error("max_redraws must be at least 1 (got {got})")]
    InvalidRedrawLimit {
        /// The redraw limit supplied by the caller.
        got: usize,
    },
    /// `step` was called after the lineages had already coalesced to the root.
    #[error("step requires at least 2 active lineages but {active} remain")]
    PreconditionViolated {
        /// Active length at the time of the call.
        active: usize,
    },
    /// The injected [`crate::IndexSource`] broke its contract.
    #[error("index source contract violated: {violation}")]
    ContractViolation {
        #[source]
        /// Description of the breach.
        violation: SourceViolation,
    },
    /// A validated slot fell outside the backing storage.
    ///
    /// Slots are checked against the active length, which never exceeds the
    /// storage length, so callers cannot trigger this through the public API.
    /// It guards the relabeler's internal consistency instead of panicking.
    #[error("slot {slot} is outside the active storage of length {len}")]
    SlotOutOfBounds {
        /// Offending slot index.
        slot: usize,
        /// Length of the backing storage.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`RelabelError`] variants.
    enum RelabelErrorCode for RelabelError {
        /// A coalescent needs at least two sampled lineages.
        InvalidSampleSize => InvalidSampleSize { .. } => "RELABEL_INVALID_SAMPLE_SIZE",
        /// The redraw limit must allow at least one redraw.
        InvalidRedrawLimit => InvalidRedrawLimit { .. } => "RELABEL_INVALID_REDRAW_LIMIT",
        /// `step` was called after the lineages had already coalesced.
        PreconditionViolated => PreconditionViolated { .. } => "RELABEL_PRECONDITION_VIOLATED",
        /// The injected index source broke its contract.
        ContractViolation => ContractViolation { .. } => "RELABEL_CONTRACT_VIOLATION",
        /// A validated slot fell outside the backing storage.
        SlotOutOfBounds => SlotOutOfBounds { .. } => "RELABEL_SLOT_OUT_OF_BOUNDS",
    }
}

impl RelabelError {
    /// Retrieve the inner [`SourceViolationCode`] when the error originated in
    /// the [`crate::IndexSource`].
    #[must_use]
    pub const fn source_code(&self) -> Option<SourceViolationCode> {
        match self {
            Self::ContractViolation { violation } => Some(violation.code()),
            _ => None,
        }
    }
}

impl From<SourceViolation> for RelabelError {
    fn from(violation: SourceViolation) -> Self {
        Self::ContractViolation { violation }
    }
}

/// A coalescence event that does not fit the alive-set bookkeeping of a
/// [`crate::LineageLedger`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum LedgerViolation {
    /// A consumed label was not alive when the event was recorded.
    #[error("label {label} is not alive")]
    LabelNotAlive {
        /// The label that was missing from the alive set.
        label: Label,
    },
    /// Both consumed labels were the same lineage.
    #[error("label {label} cannot coalesce with itself")]
    SelfCoalescence {
        /// The repeated label.
        label: Label,
    },
    /// The created label differs from the next label the ledger expects.
    #[error("expected event to create label {expected} but it created {found}")]
    UnexpectedLabel {
        /// Label the ledger expected the event to create.
        expected: Label,
        /// Label the event actually created.
        found: Label,
    },
    /// The ledger already holds a single root lineage.
    #[error("all lineages have already coalesced into root {root}")]
    AlreadyResolved {
        /// The root label.
        root: Label,
    },
    /// An active window holds a different number of labels than are alive.
    #[error("active window holds {window} labels but {alive} are alive")]
    WindowSizeMismatch {
        /// Number of labels in the checked window.
        window: usize,
        /// Number of labels the ledger considers alive.
        alive: usize,
    },
    /// An active window holds the same alive label in more than one slot.
    #[error("label {label} appears more than once in the active window")]
    DuplicateInWindow {
        /// The repeated label.
        label: Label,
    },
}

define_error_codes! {
    /// Stable codes describing [`LedgerViolation`] variants.
    enum LedgerViolationCode for LedgerViolation {
        /// A consumed label was not alive when the event was recorded.
        LabelNotAlive => LabelNotAlive { .. } => "LEDGER_LABEL_NOT_ALIVE",
        /// Both consumed labels were the same lineage.
        SelfCoalescence => SelfCoalescence { .. } => "LEDGER_SELF_COALESCENCE",
        /// The created label differs from the next expected label.
        UnexpectedLabel => UnexpectedLabel { .. } => "LEDGER_UNEXPECTED_LABEL",
        /// The ledger already holds a single root lineage.
        AlreadyResolved => AlreadyResolved { .. } => "LEDGER_ALREADY_RESOLVED",
        /// An active window disagrees with the alive count.
        WindowSizeMismatch => WindowSizeMismatch { .. } => "LEDGER_WINDOW_SIZE_MISMATCH",
        /// An active window repeats an alive label.
        DuplicateInWindow => DuplicateInWindow { .. } => "LEDGER_DUPLICATE_IN_WINDOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, RelabelError>;
