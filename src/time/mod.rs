/// Elapsed-time reference.
pub mod anchor;
