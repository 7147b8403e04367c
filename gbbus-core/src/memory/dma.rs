use crate::memory::{address, AddressSpace};

/// Copy 160 bytes starting at `source_high * 0x100` into OAM. Every byte goes through the normal
/// read and write paths, and the transfer finishes before this function returns.
pub(super) fn oam_dma_transfer(address_space: &mut AddressSpace, source_high: u8) {
    // Highest possible source byte is 0xFF9F, so the additions below cannot overflow
    let source = u16::from(source_high) << 8;

    log::debug!(
        "OAM DMA transfer from {source:04X}-{:04X} to {:04X}",
        source + address::OAM_SIZE - 1,
        address::OAM_START
    );

    for offset in 0..address::OAM_SIZE {
        let byte = address_space.read_address_u8(source + offset);
        address_space.write_address_u8(address::OAM_START + offset, byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_source_block_into_oam() {
        let mut address_space = AddressSpace::new();

        let pattern: Vec<u8> = (0..address::OAM_SIZE)
            .map(|i| (i as u8).wrapping_mul(7) ^ 0x5A)
            .collect();
        for (offset, &byte) in (0..).zip(&pattern) {
            address_space.write_address_u8(0x8300 + offset, byte);
        }

        address_space.write_address_u8(address::DMA_REGISTER, 0x83);

        let oam: Vec<_> = address_space
            .read_range(u32::from(address::OAM_START)..u32::from(address::OAM_END) + 1)
            .unwrap()
            .collect();
        assert_eq!(pattern, oam);
    }

    #[test]
    fn leaves_bytes_past_oam_untouched() {
        let mut address_space = AddressSpace::new();
        for address in 0xC000..0xC100 {
            address_space.write_address_u8(address, 0xEE);
        }

        address_space.write_address_u8(address::DMA_REGISTER, 0xC0);

        assert_eq!(0xEE, address_space.read_address_u8(address::OAM_END));
        assert_eq!(0x00, address_space.read_address_u8(address::UNUSABLE_START));
    }

    #[test]
    fn source_in_rom_region() {
        let rom: Vec<u8> = (0..=0xFF).cycle().take(0x8000).collect();

        let mut address_space = AddressSpace::new();
        address_space.load_rom(&rom);

        address_space.write_address_u8(address::DMA_REGISTER, 0x12);

        for offset in 0..address::OAM_SIZE {
            assert_eq!(
                offset as u8,
                address_space.read_address_u8(address::OAM_START + offset)
            );
        }
    }

    #[test]
    fn highest_source_page() {
        let mut address_space = AddressSpace::new();
        address_space.write_address_u8(0xFF80, 0x42);

        address_space.write_address_u8(address::DMA_REGISTER, 0xFF);

        assert_eq!(0x42, address_space.read_address_u8(address::OAM_START + 0x80));
    }
}
