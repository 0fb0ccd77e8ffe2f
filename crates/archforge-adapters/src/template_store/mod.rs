//! Template registry implementations.

mod builtin;

pub use builtin::BuiltinStore;
