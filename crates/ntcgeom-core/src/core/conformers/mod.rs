//! The read-only library of reference NtC conformers.
//!
//! The table is static data, so concurrent readers need no synchronization.

pub mod ntc;
mod table;

pub use ntc::{NtC, StepMetrics, StepParameter};

use table::NTCS;

/// Conformer classes in table order.
pub const NTC_CLASSES: [&str; 7] = ["AA", "AB", "BA", "BB", "IC", "OP", "Z"];

/// All reference conformers, in declaration order.
pub fn all() -> &'static [NtC] {
    &NTCS
}

pub fn lookup(name: &str) -> Option<&'static NtC> {
    index_of(name).map(|index| &NTCS[index])
}

/// Position of a conformer in the table.
pub fn index_of(name: &str) -> Option<usize> {
    let name = name.trim();
    NTCS.iter().position(|ntc| ntc.name == name)
}

/// Returns every conformer from `first` to `last`, both inclusive, in declaration order.
///
/// # Return
///
/// Returns `None` if either name is unknown or `last` precedes `first`.
pub fn range(first: &str, last: &str) -> Option<&'static [NtC]> {
    let start = index_of(first)?;
    let end = index_of(last)?;
    if end < start {
        return None;
    }
    NTCS.get(start..=end)
}

/// Conformers belonging to one class, in declaration order.
pub fn conformers_of_class(class: &str) -> Vec<&'static NtC> {
    NTCS.iter().filter(|ntc| ntc.class() == class).collect()
}
