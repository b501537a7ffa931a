mod sequence;
pub use sequence::Sequence;
