//! NtC assignment of dinucleotide steps.
//!
//! A [`ClassificationContext`] is built once from the four resource files (golden
//! steps, cluster means, confal sigmas and reference nu angles) and is immutable
//! afterwards. Hosting applications that want a single shared context keep it in a
//! [`ContextSlot`], which serializes initialization and hands out shared handles.

mod classifier;
mod context;
#[cfg(test)]
pub(crate) mod testing;

pub use classifier::{ClassifiedStep, UNASSIGNED_CLASS, UNASSIGNED_NTC, Violation, classify};
pub use context::{ClassificationContext, ClassificationResources, ContextSlot, ContextState};
