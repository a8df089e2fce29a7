use crate::backing_store::PageBlock;
use crate::constants::*;
use crate::error::{Result, VmError};

/// Physical memory - a fixed array of frames, each holding one page
pub struct PhysicalMemory {
    frames: Box<[[u8; FRAME_SIZE]]>,
}

impl PhysicalMemory {
    /// Create physical memory with the reference number of frames, all zeroed
    pub fn new() -> Self {
        Self::with_frames(NUM_FRAMES)
    }

    pub fn with_frames(num_frames: usize) -> Self {
        PhysicalMemory {
            frames: vec![[0u8; FRAME_SIZE]; num_frames].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Overwrite an entire frame with a page block
    pub fn fill_frame(&mut self, frame: usize, block: &PageBlock) {
        self.frames[frame].copy_from_slice(block);
    }

    /// Read the signed byte stored at `offset` within `frame`
    #[inline]
    pub fn read_byte(&self, frame: usize, offset: u8) -> i8 {
        self.frames[frame][offset as usize] as i8
    }

    #[inline]
    pub fn frame(&self, frame: usize) -> &[u8; FRAME_SIZE] {
        &self.frames[frame]
    }

    /// Physical address of `offset` within `frame`
    #[inline]
    pub fn frame_to_address(frame: usize, offset: u8) -> u32 {
        ((frame as u32) << OFFSET_BITS) | offset as u32
    }
}

impl Default for PhysicalMemory {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands out frame indices in order. Frames are never returned to the pool.
#[derive(Debug, Clone)]
pub struct FramePool {
    next_free: usize,
    capacity: usize,
}

impl FramePool {
    pub fn new(capacity: usize) -> Self {
        FramePool {
            next_free: 0,
            capacity,
        }
    }

    /// Take the next unused frame
    pub fn allocate_frame(&mut self) -> Result<usize> {
        if self.next_free >= self.capacity {
            return Err(VmError::OutOfFrames {
                capacity: self.capacity,
            });
        }
        let frame = self.next_free;
        self.next_free += 1;
        log::trace!("allocated frame {}", frame);
        Ok(frame)
    }

    #[inline]
    pub fn allocated(&self) -> usize {
        self.next_free
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.capacity - self.next_free
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for FramePool {
    fn default() -> Self {
        Self::new(NUM_FRAMES)
    }
}
