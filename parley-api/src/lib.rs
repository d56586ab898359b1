//! Parley API - Shared message and attachment types for the Parley client.

mod attachment;

pub use attachment::*;
