//! Econometrics course browser
//!
//! A terminal browser for the Advanced Econometric Methods course. The
//! domain, state machine and terminal UI live in the workspace crates; this
//! crate adds the headless output used by `--list` and `--page`.

pub mod headless;
