pub mod address;
mod dma;
pub mod ioregisters;

use crate::input::{Joypad, JoypadState};
use crate::memory::ioregisters::IoRegister;
use std::ops::Range;
use thiserror::Error;

const ADDRESS_SPACE_END: u32 = address::ADDRESS_SPACE_SIZE as u32;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    #[error("address out of range: 0x{address:04X}")]
    AddressOutOfRange { address: u32 },
}

/// Combine two bytes into a little-endian 16-bit word.
#[must_use]
pub fn decode_u16(low: u8, high: u8) -> u16 {
    u16::from_le_bytes([low, high])
}

/// Split a 16-bit word into its (low, high) bytes.
#[must_use]
pub fn encode_u16(value: u16) -> (u8, u8) {
    let [low, high] = value.to_le_bytes();
    (low, high)
}

fn next_address(address: u16) -> Result<u16, MemoryError> {
    address.checked_add(1).ok_or(MemoryError::AddressOutOfRange {
        address: u32::from(address) + 1,
    })
}

/// The full 16-bit address space plus the joypad line state backing the JOYP register.
///
/// Reads always return the stored byte. CPU writes go through a dispatcher: the cartridge ROM
/// region is write-protected, and writes to JOYP and DMA run a handler instead of storing the
/// written value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSpace {
    memory: Box<[u8; address::ADDRESS_SPACE_SIZE]>,
    pub(crate) joypad_state: JoypadState,
}

impl AddressSpace {
    #[must_use]
    pub fn new() -> Self {
        let memory: Box<[u8]> = vec![0; address::ADDRESS_SPACE_SIZE].into_boxed_slice();
        let Ok(memory) = Box::<[u8; address::ADDRESS_SPACE_SIZE]>::try_from(memory) else {
            unreachable!("boxed slice was allocated with exactly ADDRESS_SPACE_SIZE bytes");
        };

        Self {
            memory,
            joypad_state: JoypadState::new(),
        }
    }

    /// Copy a cartridge image into the ROM region, bypassing the CPU write guard. Only the first
    /// 32 KiB are mapped; anything past that would need a bank switching mapper.
    pub fn load_rom(&mut self, rom: &[u8]) {
        let rom_len = usize::from(address::ROM_LIMIT);
        if rom.len() > rom_len {
            log::warn!(
                "ROM image is {} bytes, only the first {rom_len} bytes will be mapped",
                rom.len()
            );
        }

        let len = rom.len().min(rom_len);
        self.memory[..len].copy_from_slice(&rom[..len]);
    }

    /// Zero every byte outside the ROM region and release all joypad lines.
    pub fn reset(&mut self) {
        self.memory[usize::from(address::ROM_LIMIT)..].fill(0);
        self.joypad_state = JoypadState::new();
    }

    #[must_use]
    pub fn read_address_u8(&self, address: u16) -> u8 {
        self.memory[usize::from(address)]
    }

    /// Read a little-endian word, low byte at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::AddressOutOfRange`] if `address` is `0xFFFF`, since the high byte
    /// would be past the end of the address space.
    pub fn read_address_u16(&self, address: u16) -> Result<u16, MemoryError> {
        let low = self.read_address_u8(address);
        let high = self.read_address_u8(next_address(address)?);
        Ok(decode_u16(low, high))
    }

    /// Iterate over the bytes in `[range.start, range.end)`. An empty or inverted range yields no
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::AddressOutOfRange`] if `range.end` is past `0x10000`.
    pub fn read_range(
        &self,
        range: Range<u32>,
    ) -> Result<impl Iterator<Item = u8> + '_, MemoryError> {
        let Range { start, end } = range;
        if end > ADDRESS_SPACE_END {
            return Err(MemoryError::AddressOutOfRange {
                address: start.max(ADDRESS_SPACE_END),
            });
        }

        let start = start.min(end) as usize;
        Ok(self.memory[start..end as usize].iter().copied())
    }

    /// Write a byte as the CPU would.
    pub fn write_address_u8(&mut self, address: u16, value: u8) {
        match address {
            address::ROM_START..=address::ROM_END => {
                log::trace!("Dropping write of {value:02X} to ROM address {address:04X}");
            }
            address::JOYPAD_REGISTER => {
                self.joypad().update_joyp(value);
            }
            address::DMA_REGISTER => {
                dma::oam_dma_transfer(self, value);
            }
            _ => {
                if log::log_enabled!(log::Level::Trace) {
                    if let Some(register) = IoRegister::from_address(address) {
                        log::trace!("Writing {value:02X} to {register:?}");
                    }
                }
                self.memory[usize::from(address)] = value;
            }
        }
    }

    /// Write `low` at `address` and then `high` at `address + 1`. Each byte goes through the full
    /// write dispatch on its own, so either half can trigger a register handler.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::AddressOutOfRange`] if `address` is `0xFFFF`. The low byte has
    /// already been written at that point.
    pub fn write_address_pair(
        &mut self,
        address: u16,
        high: u8,
        low: u8,
    ) -> Result<(), MemoryError> {
        self.write_address_u8(address, low);
        self.write_address_u8(next_address(address)?, high);
        Ok(())
    }

    /// Write a little-endian word.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::AddressOutOfRange`] if `address` is `0xFFFF`. The low byte has
    /// already been written at that point.
    pub fn write_address_u16(&mut self, address: u16, value: u16) -> Result<(), MemoryError> {
        let (low, high) = encode_u16(value);
        self.write_address_pair(address, high, low)
    }

    /// Store a byte directly, skipping the write dispatch. Used by register handlers to publish
    /// their output.
    pub(crate) fn store_raw(&mut self, address: u16, value: u8) {
        self.memory[usize::from(address)] = value;
    }

    /// Obtain the joypad input controller, which updates line state and the JOYP register.
    pub fn joypad(&mut self) -> Joypad<'_> {
        Joypad::new(self)
    }

    #[must_use]
    pub fn joypad_state(&self) -> JoypadState {
        self.joypad_state
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}
