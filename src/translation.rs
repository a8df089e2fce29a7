use std::fmt;

use crate::constants::*;

/// A 16-bit logical address split into page number and offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogicalAddress {
    pub raw: u16,
    pub page: u8,
    pub offset: u8,
}

impl LogicalAddress {
    /// Decompose a raw address into its components
    pub fn from_raw(raw: u16) -> Self {
        let page = ((raw >> OFFSET_BITS) & PAGE_MASK) as u8;
        let offset = (raw & OFFSET_MASK) as u8;

        LogicalAddress { raw, page, offset }
    }

    /// Reassemble the raw address from page number and offset
    #[inline]
    pub fn compose(page: u8, offset: u8) -> Self {
        Self::from_raw(((page as u16) << OFFSET_BITS) | offset as u16)
    }
}

impl From<u16> for LogicalAddress {
    fn from(raw: u16) -> Self {
        Self::from_raw(raw)
    }
}

impl TryFrom<i64> for LogicalAddress {
    type Error = String;

    /// Reject values outside [0, 65535] instead of masking them
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(format!("{} is negative", value));
        }
        if value > MAX_LOGICAL_ADDRESS as i64 {
            return Err(format!("{} exceeds max {}", value, MAX_LOGICAL_ADDRESS));
        }
        Ok(Self::from_raw(value as u16))
    }
}

impl fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LA({}) = (p={}, d={})", self.raw, self.page, self.offset)
    }
}

/// Result of translating one logical address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub logical: LogicalAddress,
    pub frame: usize,
    pub physical: u32,
    pub value: i8,
    pub tlb_hit: bool,
    pub page_fault: bool,
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "virtual address: {}, physical address: {}, value: {}",
            self.logical.raw, self.physical, self.value
        )
    }
}
