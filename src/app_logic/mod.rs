/*
 * This module provides the application logic layer, centered around
 * `ShellAppLogic` which acts as the controller: it drives the lifecycle state
 * machine, routes renderer requests to dialogs and shell integration, and
 * turns completed dialogs into renderer notifications.
 * Unit tests for `ShellAppLogic` are in `handler_tests.rs`.
 */
pub mod handler;
pub mod lifecycle;

#[cfg(test)]
mod handler_tests;

pub use handler::ShellAppLogic;
pub use lifecycle::LifecyclePhase;
