//! Locale message storage and resolution.
//!
//! This module provides the [`LocaleStore`] consulted by components at render
//! time, along with the data types it is built from: [`LocaleCode`],
//! [`MessageBundle`] and [`MessageRegistry`]. Resolution never fails; a key
//! missing from both the requested and the fallback bundle resolves to itself
//! and is recorded as a [`MissingMessageKey`].

mod bundle;
mod code;
mod diagnostic;
mod error;
mod registry;
mod store;
mod suggest;
mod template;

pub use bundle::MessageBundle;
pub use code::LocaleCode;
pub use diagnostic::{BundleWarning, MissingMessageKey};
pub use error::LocaleError;
pub use registry::MessageRegistry;
pub use store::LocaleStore;
pub use suggest::compute_suggestions;
pub use template::{Segment, interpolate, parse_message};
