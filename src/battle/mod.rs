pub mod capture;
pub mod controller;
pub mod engine;
pub mod state;

#[cfg(test)]
pub(crate) mod tests;
