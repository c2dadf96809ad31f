use crate::*;
pub use random::*;

mod random;

pub trait FieldGenerator {
    fn generate(&mut self, size: Coord) -> Result<Field>;
}
