//! Single test binary entry point.
//!
//! All integration tests link into one binary to keep link times down.
//!
//! Structure:
//! - helpers: Page builders and event shorthands
//! - integration: Whole drag/click/lifecycle workflows against a scripted page
//! - unit: Single-component unit tests
