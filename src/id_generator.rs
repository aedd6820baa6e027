use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;

use crate::error::{IdError, Result};
use crate::strong_hash::md5::Md5Sum;
use crate::strong_hash::StrongHash;

/// Width of an MD5 identifier in hex characters
pub const MD5_HEX_LEN: usize = 32;

const READ_BLOCK_SIZE: usize = 8 * 1024;

///
/// Lowercase hex MD5 of `bytes`, always [`MD5_HEX_LEN`] characters wide
///
/// ```
/// use dart_utils::id_generator::md5_hash;
///
/// assert_eq!(md5_hash(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
/// // the leading zero of the digest is kept
/// assert_eq!(md5_hash(b"a"), "0cc175b9c0f1b6a831c399e269772661");
/// ```
pub fn md5_hash(bytes: &[u8]) -> String {
    hash_hex::<Md5Sum>(bytes)
}

/// Every digest byte becomes exactly two hex characters, so the width is fixed
pub fn hash_hex<S: StrongHash>(bytes: &[u8]) -> String {
    hex::encode(S::hash(bytes))
}

pub fn md5_hash_reader<R: Read>(reader: R) -> Result<String> {
    hash_reader::<Md5Sum, R>(reader)
}

fn hash_reader<S, R>(mut reader: R) -> Result<String>
where
    S: StrongHash,
    R: Read,
{
    let mut hasher = S::new();
    let mut buf = vec![0; READ_BLOCK_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(read_bytes) => hasher.consume(&buf[..read_bytes]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(hex::encode(hasher.finalize()))
}

pub fn md5_hash_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    debug!("hashing {}", path.display());

    let file = File::open(path).map_err(|source| IdError::File {
        path: path.to_path_buf(),
        source,
    })?;
    md5_hash_reader(file).map_err(|e| IdError::at_path(path.to_path_buf(), e))
}

/// Hashes all `paths` in parallel, results come back in the order of `paths`
pub fn md5_hash_files<P>(paths: &[P]) -> Vec<(PathBuf, Result<String>)>
where
    P: AsRef<Path> + Sync,
{
    info!("hashing {} files", paths.len());
    paths
        .par_iter()
        .map(|path| (path.as_ref().to_path_buf(), md5_hash_file(path)))
        .collect()
}
