//! configen - CMake build-configuration dispatcher
//!
//! This library provides the decision logic behind the `configen` binary:
//! platform detection, toolchain preconditions, and assembly of the CMake
//! invocation. Process execution goes through a runner trait so the
//! dispatch logic is testable without a real toolchain.

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod platform;
pub mod runner;
pub mod toolchain;
