pub mod app;
pub mod badge;
pub mod components;
pub mod config;
pub mod gallery;
pub mod interactive;
pub mod random;
pub mod util;
