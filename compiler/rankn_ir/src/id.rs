//! Globally unique, labeled identifiers.
//!
//! Type variables, placeholders and term bindings are identified by a raw
//! 32-bit id drawn from a process-wide atomic counter. The label is carried
//! along for rendering only.
//!
//! # Identity
//!
//! Two ids are equal exactly when their raw values are equal. Labels never
//! participate in comparison or hashing, so two ids minted with the same
//! label are always distinct:
//!
//! ```text
//! let a = TypeId::fresh("a");
//! let b = TypeId::fresh("a");
//! assert_ne!(a, b);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};
use std::sync::Arc;

/// Define an identifier type backed by its own atomic counter.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $counter:ident) => {
        static $counter: AtomicU32 = AtomicU32::new(1);

        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            raw: u32,
            label: Arc<str>,
        }

        impl $name {
            /// Mint a new identifier, distinct from every other id of this kind.
            pub fn fresh(label: impl Into<Arc<str>>) -> Self {
                Self {
                    raw: $counter.fetch_add(1, AtomicOrdering::Relaxed),
                    label: label.into(),
                }
            }

            /// Get the raw id.
            #[inline]
            pub fn raw(&self) -> u32 {
                self.raw
            }

            /// Get the display label.
            #[inline]
            pub fn label(&self) -> &str {
                &self.label
            }
        }

        impl PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.raw == other.raw
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.raw.cmp(&other.raw)
            }
        }

        impl Hash for $name {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.raw.hash(state);
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", self.label, self.raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.label)
            }
        }
    };
}

define_id!(
    /// Identifier of a rigid type variable or a placeholder.
    TypeId,
    NEXT_TYPE_ID
);

define_id!(
    /// Identifier of a term-level binding (a lambda argument).
    BindingId,
    NEXT_BINDING_ID
);
