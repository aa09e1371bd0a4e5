//! Main module for slimui library functionality

pub mod building;
pub mod factory;
pub mod formats;
pub mod ir;
pub mod loader;
pub mod registry;
pub mod testing;
pub mod toolkit;
pub mod transforms;
