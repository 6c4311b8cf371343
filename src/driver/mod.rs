pub mod traits;
pub mod web;

#[cfg(test)]
pub mod fake;
