pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

#[cfg(test)]
mod account_scenario_tests;
