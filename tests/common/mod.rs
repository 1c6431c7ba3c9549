pub mod brute_force;
pub mod synthetic_grid;
