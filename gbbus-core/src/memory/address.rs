//! Fixed addresses of the 64 KiB bus. Region bounds are inclusive unless named `_SIZE` or
//! `_LIMIT`.

/// Number of addressable bytes.
pub const ADDRESS_SPACE_SIZE: usize = 0x10000;

/// Cartridge ROM. Loaded once and never changed by CPU writes.
pub const ROM_START: u16 = 0x0000;
pub const ROM_END: u16 = 0x7FFF;
/// First address a CPU write can reach.
pub const ROM_LIMIT: u16 = ROM_END + 1;

pub const VRAM_START: u16 = 0x8000;
pub const VRAM_END: u16 = 0x9FFF;
pub const EXTERNAL_RAM_START: u16 = 0xA000;
pub const EXTERNAL_RAM_END: u16 = 0xBFFF;
pub const WORKING_RAM_START: u16 = 0xC000;
pub const WORKING_RAM_END: u16 = 0xDFFF;
/// Stored as ordinary bytes, not mirrored onto working RAM.
pub const ECHO_RAM_START: u16 = 0xE000;
pub const ECHO_RAM_END: u16 = 0xFDFF;

/// Sprite attribute table, the destination of every OAM DMA transfer.
pub const OAM_START: u16 = 0xFE00;
pub const OAM_END: u16 = 0xFE9F;
pub const OAM_SIZE: u16 = OAM_END - OAM_START + 1;

pub const UNUSABLE_START: u16 = 0xFEA0;
pub const UNUSABLE_END: u16 = 0xFEFF;
pub const IO_REGISTERS_START: u16 = 0xFF00;
pub const IO_REGISTERS_END: u16 = 0xFF7F;
pub const HRAM_START: u16 = 0xFF80;
pub const HRAM_END: u16 = 0xFFFE;

/// Interrupt enable mask, the last byte of the bus.
pub const IE_REGISTER: u16 = 0xFFFF;

/// Tile data blocks. Sprites always index into the first one.
pub const TILE_TABLE_ONE: u16 = VRAM_START;
pub const TILE_TABLE_TWO: u16 = 0x8800;
pub const SPRITE_TABLE: u16 = TILE_TABLE_ONE;

/// Background and window tile maps, selected through LCDC.
pub const TILE_MAP_ONE: u16 = 0x9800;
pub const TILE_MAP_TWO: u16 = 0x9C00;

pub const JOYPAD_REGISTER: u16 = IO_REGISTERS_START;
pub const IF_REGISTER: u16 = 0xFF0F;

pub const LCDC_REGISTER: u16 = 0xFF40;
pub const STAT_REGISTER: u16 = 0xFF41;
pub const SCY_REGISTER: u16 = 0xFF42;
pub const SCX_REGISTER: u16 = 0xFF43;
pub const LY_REGISTER: u16 = 0xFF44;
pub const LYC_REGISTER: u16 = 0xFF45;
/// Writing the high byte of a source page here starts an OAM DMA transfer.
pub const DMA_REGISTER: u16 = 0xFF46;
pub const BGP_REGISTER: u16 = 0xFF47;
pub const OBP0_REGISTER: u16 = 0xFF48;
pub const OBP1_REGISTER: u16 = 0xFF49;
pub const WY_REGISTER: u16 = 0xFF4A;
/// Window X position plus 7.
pub const WX_REGISTER: u16 = 0xFF4B;
