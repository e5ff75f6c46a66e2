// Test modules for hangul-convert-client crate
//
// Each source file has a corresponding test file that focuses on
// behavior verification. HTTP-level tests against a mock server live in
// the crate's tests/ directory.

// Test helper utilities
pub mod helpers;
