//! Handler implementations

pub mod console;
pub mod memory;
pub mod writer;

pub use console::{ConsoleHandler, Stream};
pub use memory::MemoryHandler;
pub use writer::WriterHandler;

// Re-export trait for convenience
pub use crate::core::Handler;

use crate::core::{Entry, LabelStore, Labels};
use std::borrow::Cow;

/// Entry labels merged with a handler's ambient labels.
///
/// Entry labels win on a key clash. Ambient values that resolve to an empty
/// string are left out.
pub(crate) fn effective_labels<'e>(entry: &'e Entry<'_>, ambient: &LabelStore) -> Cow<'e, Labels> {
    if ambient.is_empty() {
        return Cow::Borrowed(entry.labels());
    }

    let ambient: Labels = ambient
        .snapshot()
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();

    let mut labels = entry.labels().clone();
    labels.merge_missing(&ambient);
    Cow::Owned(labels)
}
