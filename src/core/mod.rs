pub mod assignment;
pub mod carousel;
pub mod date_window;
pub mod day_grid;
pub mod deletion;
pub mod gesture;
pub mod grocery;
pub mod recipe;
pub mod spring;
