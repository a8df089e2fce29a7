use std::io::{Read, Seek};

use crate::backing_store::BackingStore;
use crate::constants::*;
use crate::error::Result;
use crate::memory::{FramePool, PhysicalMemory};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTableEntry {
    pub frame: usize,
    pub valid: bool,
}

/// Outcome of resolving a page number to a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub frame: usize,
    pub faulted: bool,
}

/// One entry per logical page. An entry becomes valid once, on the page's
/// first fault, and keeps its frame for the rest of the run.
pub struct PageTable {
    entries: [PageTableEntry; PAGE_TABLE_SIZE],
}

impl PageTable {
    pub fn new() -> Self {
        PageTable {
            entries: [PageTableEntry::default(); PAGE_TABLE_SIZE],
        }
    }

    #[inline]
    pub fn entry(&self, page: u8) -> PageTableEntry {
        self.entries[page as usize]
    }

    /// Frame holding `page`, if it is resident
    pub fn lookup(&self, page: u8) -> Option<usize> {
        let entry = self.entry(page);
        entry.valid.then_some(entry.frame)
    }

    /// Map `page` to a frame, faulting it in from the backing store if needed.
    ///
    /// The block is read before a frame is taken from the pool, so a failed
    /// read leaves the entry invalid and the pool untouched.
    pub fn resolve<R: Read + Seek>(
        &mut self,
        page: u8,
        store: &mut BackingStore<R>,
        pool: &mut FramePool,
        memory: &mut PhysicalMemory,
    ) -> Result<Resolution> {
        if let Some(frame) = self.lookup(page) {
            return Ok(Resolution {
                frame,
                faulted: false,
            });
        }

        let block = store.read_page(page)?;
        let frame = pool.allocate_frame()?;
        memory.fill_frame(frame, &block);

        self.entries[page as usize] = PageTableEntry { frame, valid: true };
        log::debug!("page fault: page {} loaded into frame {}", page, frame);

        Ok(Resolution {
            frame,
            faulted: true,
        })
    }

    pub fn resident_pages(&self) -> usize {
        self.entries.iter().filter(|e| e.valid).count()
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}
