pub mod matrix;
pub mod merge;
mod sample_name;
pub mod skip;
pub mod sources;
pub mod table;

pub use self::{
    matrix::Matrix,
    sample_name::{NamingStrategy, SampleNameError, second_field},
    table::{Columns, Table},
};
