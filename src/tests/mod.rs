//! Whitebox unit tests for the materialization and navigation engine.

mod helpers;
mod session;
