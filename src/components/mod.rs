pub mod progress_circle;
pub mod ring_controls;
pub mod simulate_button;
pub mod size_selector;
