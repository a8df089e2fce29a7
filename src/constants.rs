// 16-bit logical addresses: 8-bit page number, 8-bit offset
pub const OFFSET_BITS: u32 = 8;
pub const PAGE_BITS: u32 = 8;

pub const PAGE_SIZE: usize = 1 << OFFSET_BITS;
pub const FRAME_SIZE: usize = PAGE_SIZE;
pub const PAGE_TABLE_SIZE: usize = 1 << PAGE_BITS;

pub const NUM_FRAMES: usize = 256;
pub const PM_SIZE: usize = NUM_FRAMES * FRAME_SIZE;

pub const TLB_SIZE: usize = 16;

pub const OFFSET_MASK: u16 = (1 << OFFSET_BITS) - 1;
pub const PAGE_MASK: u16 = (1 << PAGE_BITS) - 1;
pub const ADDRESS_MASK: u32 = 0xFFFF;

pub const MAX_LOGICAL_ADDRESS: u32 = ADDRESS_MASK;
