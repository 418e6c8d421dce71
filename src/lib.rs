#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

#[macro_use]
extern crate log;

pub mod cosine;
pub mod fixed;
pub mod maths;

pub mod unit;
