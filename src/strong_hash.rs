use std::fmt::Debug;

pub mod md5;

pub trait StrongHash: Sized {
    type HashType: PartialEq + Debug + Copy + AsRef<[u8]>;

    fn new() -> Self;
    fn consume(&mut self, data: &[u8]);
    fn finalize(self) -> Self::HashType;

    fn hash(data: &[u8]) -> Self::HashType {
        let mut hasher = Self::new();
        hasher.consume(data);
        hasher.finalize()
    }
}
