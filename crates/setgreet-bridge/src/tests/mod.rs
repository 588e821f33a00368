//! Test suites for the Setgreet bridge.

pub(crate) mod support;
