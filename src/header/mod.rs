pub mod constants;
pub mod length;
mod tag;

pub use tag::Tag;
