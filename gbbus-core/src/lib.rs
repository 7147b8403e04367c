//! Memory management unit and interrupt controller for a Game Boy–class emulator.
//!
//! [`Mmu`] owns the 64KB address space. CPU reads and writes go through it, including the I/O
//! registers whose writes run handlers (JOYP multiplexing, OAM DMA). Interrupts are requested by
//! setting IF bits and serviced by [`Mmu::check_interrupts`], which calls back into a CPU
//! implementing [`InterruptCpu`].

mod config;
mod initialization;
mod input;
mod interrupts;
mod memory;
mod mmu;

pub use config::{ConfigError, HardwareModel, MmuConfig};
pub use initialization::apply_boot_registers;
pub use input::{Button, Direction, Joypad, JoypadState};
pub use interrupts::{request_interrupt, InterruptController, InterruptCpu, InterruptLine};
pub use memory::ioregisters::IoRegister;
pub use memory::{address, decode_u16, encode_u16, AddressSpace, MemoryError};
pub use mmu::Mmu;

// Display geometry shared with the graphics core
pub const BACKGROUND_WIDTH: u16 = 256;
pub const BACKGROUND_HEIGHT: u16 = 256;
pub const SCREEN_WIDTH: u8 = 160;
pub const SCREEN_HEIGHT: u8 = 144;
