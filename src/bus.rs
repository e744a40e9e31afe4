use crate::macros::impl_deref_mut;
use std::ops::{Index, IndexMut};

/// Size of the flat address space: 256 pages of 256 bytes.
pub const MEM_SIZE: usize = 1024 * 64;

/// ByteAccess handles the loading and storage of u8 values. An implementor is an addressable member of the system.
/// The memory address can be regarded as 256 pages (each page defined by the high order byte) of 256 memory locations (bytes) per page.
pub trait ByteAccess {
    fn load_u8(&self, addr: u16) -> u8;
    fn store_u8(&mut self, addr: u16, v: u8);
}

pub trait WordAccess {
    fn load_u16(&self, addr: u16) -> u16;
    fn store_u16(&mut self, addr: u16, v: u16);
}

// blanket implementation of Word Access for every item that implements `ByteAccess`
impl<T: ByteAccess> WordAccess for T {
    // 6502 arranges integers in little-endian order. lower bytes first
    fn load_u16(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.load_u8(addr), self.load_u8(addr.wrapping_add(1))])
    }

    fn store_u16(&mut self, addr: u16, v: u16) {
        let [lo, hi] = v.to_le_bytes();
        self.store_u8(addr, lo);
        self.store_u8(addr.wrapping_add(1), hi);
    }
}

/// Flat 64 KiB memory image. Every `u16` is a valid address, so nothing here can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    data: Box<[u8]>,
}

impl_deref_mut!(Memory {data, [u8]});

impl Default for Memory {
    fn default() -> Self {
        Self {
            data: vec![0u8; MEM_SIZE].into_boxed_slice(),
        }
    }
}

impl Memory {
    pub fn new() -> Self {
        Default::default()
    }

    /// Zeroes all 65 536 bytes.
    pub fn initialize(&mut self) {
        self.data.fill(0);
    }

    pub fn read_byte(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    pub fn write_byte(&mut self, addr: u16, v: u8) {
        self.data[addr as usize] = v;
    }

    /// Stores `v` little-endian at `addr`/`addr+1` and debits two cycles from the caller's budget.
    pub fn write_word(&mut self, addr: u16, v: u16, cycles: &mut i32) {
        self.store_u16(addr, v);
        *cycles = cycles.saturating_sub(2);
    }

    /// Copies `bytes` in starting at `addr`. The destination wraps around at the top of memory.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let mut addr = addr;
        for &b in bytes {
            self.write_byte(addr, b);
            addr = addr.wrapping_add(1);
        }
    }
}

impl ByteAccess for Memory {
    fn load_u8(&self, addr: u16) -> u8 {
        self.read_byte(addr)
    }

    fn store_u8(&mut self, addr: u16, v: u8) {
        self.write_byte(addr, v);
    }
}

impl Index<u16> for Memory {
    type Output = u8;

    fn index(&self, addr: u16) -> &Self::Output {
        &self.data[addr as usize]
    }
}

impl IndexMut<u16> for Memory {
    fn index_mut(&mut self, addr: u16) -> &mut Self::Output {
        &mut self.data[addr as usize]
    }
}
