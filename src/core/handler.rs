//! Handler trait for entry output destinations

use super::{entry::Entry, error::Result};
use std::sync::Arc;

/// Consumes finalized entries.
///
/// Handlers are shared by every thread logging through an instance, so
/// `log` takes `&self`; a handler guards its own mutable state. A returned
/// error is counted and reported on stderr by the instance but never reaches
/// the code that emitted the entry. The same holds for a panic.
///
/// # Example
///
/// ```
/// use labelled_logger::core::{Entry, Handler, Result};
///
/// struct Discard;
///
/// impl Handler for Discard {
///     fn log(&self, _entry: &Entry<'_>) -> Result<()> {
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "discard"
///     }
/// }
/// ```
pub trait Handler: Send + Sync {
    fn log(&self, entry: &Entry<'_>) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn log(&self, entry: &Entry<'_>) -> Result<()> {
        (**self).log(entry)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn log(&self, entry: &Entry<'_>) -> Result<()> {
        (**self).log(entry)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
