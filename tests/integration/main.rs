//! Integration tests for the chalk binary and library.

mod helpers;
mod library_test;
mod paint_test;
