use crate::memory::address;

/// Named hardware registers in the I/O region. Each discriminant is the register's offset from
/// `0xFF00`; offsets with no entry here are plain storage.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IoRegister {
    JOYP = 0x00,
    TIMA = 0x05,
    TMA = 0x06,
    TAC = 0x07,
    IF = 0x0F,
    NR10 = 0x10,
    NR11 = 0x11,
    NR12 = 0x12,
    NR14 = 0x14,
    NR21 = 0x16,
    NR22 = 0x17,
    NR24 = 0x19,
    NR30 = 0x1A,
    NR31 = 0x1B,
    NR32 = 0x1C,
    NR34 = 0x1E,
    NR41 = 0x20,
    NR42 = 0x21,
    NR43 = 0x22,
    NR44 = 0x23,
    NR50 = 0x24,
    NR51 = 0x25,
    NR52 = 0x26,
    LCDC = 0x40,
    STAT = 0x41,
    SCY = 0x42,
    SCX = 0x43,
    LY = 0x44,
    LYC = 0x45,
    DMA = 0x46,
    BGP = 0x47,
    OBP0 = 0x48,
    OBP1 = 0x49,
    WY = 0x4A,
    WX = 0x4B,
}

impl IoRegister {
    pub const ALL: [Self; 35] = [
        Self::JOYP,
        Self::TIMA,
        Self::TMA,
        Self::TAC,
        Self::IF,
        Self::NR10,
        Self::NR11,
        Self::NR12,
        Self::NR14,
        Self::NR21,
        Self::NR22,
        Self::NR24,
        Self::NR30,
        Self::NR31,
        Self::NR32,
        Self::NR34,
        Self::NR41,
        Self::NR42,
        Self::NR43,
        Self::NR44,
        Self::NR50,
        Self::NR51,
        Self::NR52,
        Self::LCDC,
        Self::STAT,
        Self::SCY,
        Self::SCX,
        Self::LY,
        Self::LYC,
        Self::DMA,
        Self::BGP,
        Self::OBP0,
        Self::OBP1,
        Self::WY,
        Self::WX,
    ];

    #[must_use]
    pub fn from_address(address: u16) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|register| register.to_address() == address)
    }

    #[must_use]
    pub fn to_address(self) -> u16 {
        address::IO_REGISTERS_START + u16::from(self as u8)
    }

    /// Writes to JOYP and DMA run a handler instead of landing in memory.
    #[must_use]
    pub fn has_write_side_effect(self) -> bool {
        matches!(self, Self::JOYP | Self::DMA)
    }
}
