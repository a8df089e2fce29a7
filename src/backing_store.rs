use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::constants::*;
use crate::error::{Result, VmError};

/// A fixed-size block of raw page content
pub type PageBlock = [u8; PAGE_SIZE];

/// Backing Store - page `p` occupies bytes `[p * PAGE_SIZE, (p + 1) * PAGE_SIZE)`
/// of the source. Nothing is cached; every read goes back to the source.
pub struct BackingStore<R> {
    source: R,
}

impl BackingStore<BufReader<File>> {
    /// Open a backing store file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| VmError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened backing store {}", path.display());
        Ok(BackingStore::new(BufReader::new(file)))
    }
}

impl<R: Read + Seek> BackingStore<R> {
    pub fn new(source: R) -> Self {
        BackingStore { source }
    }

    /// Read the whole block for `page`. A short read is an error.
    pub fn read_page(&mut self, page: u8) -> Result<PageBlock> {
        let mut block = [0u8; PAGE_SIZE];
        let offset = page as u64 * PAGE_SIZE as u64;

        self.source
            .seek(SeekFrom::Start(offset))
            .and_then(|_| self.source.read_exact(&mut block))
            .map_err(|source| VmError::BackingStore { page, source })?;

        log::trace!("read page {} from backing store offset {}", page, offset);
        Ok(block)
    }

    /// Number of whole pages held by the source
    pub fn pages(&mut self) -> Result<u64> {
        let len = self.source.seek(SeekFrom::End(0))?;
        Ok(len / PAGE_SIZE as u64)
    }
}
