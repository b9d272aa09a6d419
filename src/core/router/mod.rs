//! File-based routing conventions.
//!
//! Routers like expo-router render screens from the file system, so nothing
//! in the code ever names them. Two heuristics cover that:
//!
//! - `route_files`: files whose location under the router directory makes them routes
//! - `screens`: `<Stack.Screen name="..." />` registrations pointing at route files

pub mod route_files;
pub mod screens;

pub use route_files::{RouteFileConvention, is_route_file};
pub use screens::{ScreenRegistration, screen_candidates};

/// `usedIn` entry for components credited by a screen registration.
pub fn screen_descriptor(registering_file: &str) -> String {
    format!("[expo-router: referenced in {}]", registering_file)
}
