use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlbEntry {
    pub page_number: u8,
    pub frame_number: usize,
}

/// Translation lookaside buffer with FIFO replacement. Hits never move the
/// replacement cursor, so eviction order is insertion order.
#[derive(Debug, Clone)]
pub struct Tlb {
    slots: [Option<TlbEntry>; TLB_SIZE],
    /// Next free slot while filling up
    len: usize,
    /// Oldest entry once full
    cursor: usize,
}

impl Tlb {
    pub fn new() -> Self {
        Tlb {
            slots: [None; TLB_SIZE],
            len: 0,
            cursor: 0,
        }
    }

    fn position(&self, page: u8) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(e) if e.page_number == page))
    }

    /// Frame cached for `page`
    pub fn lookup(&self, page: u8) -> Option<usize> {
        let idx = self.position(page)?;
        let frame = self.slots[idx].map(|e| e.frame_number)?;
        log::debug!("tlb[{}]: page {} -> frame {}", idx, page, frame);
        Some(frame)
    }

    /// Cache a translation, evicting the oldest entry when full
    pub fn insert(&mut self, page: u8, frame: usize) {
        let entry = TlbEntry {
            page_number: page,
            frame_number: frame,
        };

        if let Some(idx) = self.position(page) {
            self.slots[idx] = Some(entry);
            return;
        }

        if self.len < TLB_SIZE {
            self.slots[self.len] = Some(entry);
            self.len += 1;
        } else {
            if let Some(old) = self.slots[self.cursor] {
                log::trace!(
                    "tlb evict slot {}: page {} -> frame {}",
                    self.cursor,
                    old.page_number,
                    old.frame_number
                );
            }
            self.slots[self.cursor] = Some(entry);
            self.cursor = (self.cursor + 1) % TLB_SIZE;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == TLB_SIZE
    }

    /// Populated entries in slot order
    pub fn entries(&self) -> impl Iterator<Item = &TlbEntry> {
        self.slots.iter().flatten()
    }
}

impl Default for Tlb {
    fn default() -> Self {
        Self::new()
    }
}
