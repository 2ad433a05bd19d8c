//! Driver-side unit tests.
