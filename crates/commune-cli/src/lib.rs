//! CLI library components for the CommuneData dashboard.

pub mod logging;
