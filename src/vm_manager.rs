use std::error::Error as _;
use std::fmt;
use std::io::{Read, Seek};

use crate::backing_store::BackingStore;
use crate::constants::*;
use crate::error::{Result, VmError};
use crate::memory::{FramePool, PhysicalMemory};
use crate::page_table::PageTable;
use crate::tlb::Tlb;
use crate::translation::{LogicalAddress, Translation};

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub translated: u64,
    pub page_faults: u64,
    pub tlb_hits: u64,
    /// Inputs skipped because they were malformed or their page could not be loaded
    pub errors: u64,
}

impl Statistics {
    fn rate(count: u64, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }

    pub fn page_fault_rate(&self) -> f64 {
        Self::rate(self.page_faults, self.translated)
    }

    pub fn tlb_hit_rate(&self) -> f64 {
        Self::rate(self.tlb_hits, self.translated)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of translated addresses: {}", self.translated)?;
        writeln!(f, "Number of page faults: {}", self.page_faults)?;
        writeln!(f, "Page fault rate: {:.3}", self.page_fault_rate())?;
        writeln!(f, "Number of TLB hits: {}", self.tlb_hits)?;
        write!(f, "TLB hit rate: {:.3}", self.tlb_hit_rate())
    }
}

/// Translates logical addresses for a single process: TLB first, then the
/// page table, faulting pages in from the backing store on first use.
pub struct VmManager<R> {
    tlb: Tlb,
    page_table: PageTable,
    frames: FramePool,
    memory: PhysicalMemory,
    store: BackingStore<R>,
    stats: Statistics,
}

impl<R: Read + Seek> VmManager<R> {
    pub fn new(store: BackingStore<R>) -> Self {
        Self::with_frames(store, NUM_FRAMES)
    }

    /// Engine with a physical memory of `num_frames` frames
    pub fn with_frames(store: BackingStore<R>, num_frames: usize) -> Self {
        VmManager {
            tlb: Tlb::new(),
            page_table: PageTable::new(),
            frames: FramePool::new(num_frames),
            memory: PhysicalMemory::with_frames(num_frames),
            store,
            stats: Statistics::default(),
        }
    }

    /// Translate one logical address to its physical address and byte value
    pub fn translate(&mut self, la: LogicalAddress) -> Result<Translation> {
        log::trace!("translating {}", la);
        let (frame, tlb_hit, page_fault) = match self.tlb.lookup(la.page) {
            Some(frame) => (frame, true, false),
            None => {
                let res = self.page_table.resolve(
                    la.page,
                    &mut self.store,
                    &mut self.frames,
                    &mut self.memory,
                )?;
                self.tlb.insert(la.page, res.frame);
                (res.frame, false, res.faulted)
            }
        };

        let value = self.memory.read_byte(frame, la.offset);
        let physical = PhysicalMemory::frame_to_address(frame, la.offset);

        self.stats.translated += 1;
        if tlb_hit {
            self.stats.tlb_hits += 1;
        }
        if page_fault {
            self.stats.page_faults += 1;
        }

        Ok(Translation {
            logical: la,
            frame,
            physical,
            value,
            tlb_hit,
            page_fault,
        })
    }

    /// Translate parsed inputs in order.
    ///
    /// Malformed inputs and addresses whose page cannot be read are reported,
    /// counted and skipped. A fatal error stops the run and is returned.
    pub fn run<I>(&mut self, inputs: I) -> Result<Vec<Translation>>
    where
        I: IntoIterator<Item = Result<LogicalAddress>>,
    {
        let inputs = inputs.into_iter();
        let mut results = Vec::with_capacity(inputs.size_hint().0);
        for input in inputs {
            match input.and_then(|la| self.translate(la)) {
                Ok(t) => results.push(t),
                Err(e) if !e.is_fatal() => self.record_error(&e),
                Err(e) => return Err(e),
            }
        }
        Ok(results)
    }

    pub fn translate_batch(&mut self, addresses: &[LogicalAddress]) -> Result<Vec<Translation>> {
        self.run(addresses.iter().copied().map(Ok))
    }

    fn record_error(&mut self, err: &VmError) {
        match err.source() {
            Some(cause) => log::warn!("{}: {}", err, cause),
            None => log::warn!("{}", err),
        }
        self.stats.errors += 1;
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn frames(&self) -> &FramePool {
        &self.frames
    }

    pub fn memory(&self) -> &PhysicalMemory {
        &self.memory
    }
}
