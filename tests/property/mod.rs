//! Property-based test modules.

mod ordering;
