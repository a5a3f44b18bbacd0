//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its load orchestration and delegates rendering details to
//! `components`.

pub mod feed;
