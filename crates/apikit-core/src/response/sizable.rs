//! Payload size reporting for success envelopes.

use std::collections::{BTreeSet, HashSet};

use crate::response::page::Page;

/// Reports how many items a payload contributes to the `size` field.
///
/// Collections and pages report their length; everything else counts as a
/// single item, which is also the default — a plain DTO opts in with an
/// empty impl:
///
/// ```
/// use apikit_core::response::Sizable;
///
/// struct CarResponse;
/// impl Sizable for CarResponse {}
/// ```
pub trait Sizable {
    /// Number of items in this payload.
    fn size(&self) -> usize {
        1
    }
}

impl Sizable for () {}

impl<T: Sizable + ?Sized> Sizable for &T {
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<T> Sizable for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Sizable for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Sizable for [T; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<T, S> Sizable for HashSet<T, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Sizable for BTreeSet<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

// An absent payload still counts as one, matching the envelope contract.
impl<T: Sizable> Sizable for Option<T> {
    fn size(&self) -> usize {
        match self {
            Some(inner) => inner.size(),
            None => 1,
        }
    }
}

impl<T> Sizable for Page<T> {
    fn size(&self) -> usize {
        self.items.len()
    }
}

impl Sizable for serde_json::Value {
    fn size(&self) -> usize {
        match self {
            Self::Array(items) => items.len(),
            _ => 1,
        }
    }
}
