pub mod service;
pub mod transfer;

mod validation;

#[cfg(test)]
mod memory;
