#![allow(non_snake_case)]

mod core;
pub use self::core::*;
mod utils;
pub(crate) use utils::*;
mod matrix_math;
mod ops;
