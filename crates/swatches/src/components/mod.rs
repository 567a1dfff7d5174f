pub mod angle_slider;
pub mod badge;
pub mod circle;
pub mod gallery_page;
pub mod group;
pub mod interactive_examples;
pub mod not_found;
pub mod section;
pub mod username_page;
