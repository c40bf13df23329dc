//! Cross-module scenario tests
//!
//! Exercise the session end to end: input dispatch, camera moves and
//! effect chains together.

mod focus_scenarios;
