use super::StrongHash;

pub struct Md5Sum {
    actual: md5::Context,
}

impl StrongHash for Md5Sum {
    type HashType = [u8; 16];

    fn new() -> Self {
        Md5Sum {
            actual: md5::Context::new(),
        }
    }

    fn consume(&mut self, data: &[u8]) {
        self.actual.consume(data);
    }

    fn finalize(self) -> Self::HashType {
        self.actual.compute().into()
    }
}
