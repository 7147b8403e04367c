use crate::config::HardwareModel;
use crate::memory::ioregisters::IoRegister;
use crate::memory::AddressSpace;

// Register contents left behind by the boot ROM, minus NR52 which depends on the hardware model
const BOOT_REGISTER_VALUES: [(IoRegister, u8); 29] = [
    (IoRegister::TIMA, 0x00),
    (IoRegister::TMA, 0x00),
    (IoRegister::TAC, 0x00),
    (IoRegister::NR10, 0x80),
    (IoRegister::NR11, 0xBF),
    (IoRegister::NR12, 0xF3),
    (IoRegister::NR14, 0xBF),
    (IoRegister::NR21, 0x3F),
    (IoRegister::NR22, 0x00),
    (IoRegister::NR24, 0xBF),
    (IoRegister::NR30, 0x7F),
    (IoRegister::NR31, 0xFF),
    (IoRegister::NR32, 0x9F),
    (IoRegister::NR34, 0xBF),
    (IoRegister::NR41, 0xFF),
    (IoRegister::NR42, 0x00),
    (IoRegister::NR43, 0x00),
    (IoRegister::NR44, 0xBF),
    (IoRegister::NR50, 0x77),
    (IoRegister::NR51, 0xF3),
    (IoRegister::LCDC, 0x91),
    (IoRegister::SCY, 0x00),
    (IoRegister::SCX, 0x00),
    (IoRegister::LYC, 0x00),
    (IoRegister::BGP, 0xFC),
    (IoRegister::OBP0, 0xFF),
    (IoRegister::OBP1, 0xFF),
    (IoRegister::WY, 0x00),
    (IoRegister::WX, 0x00),
];

/// Put the I/O registers into the state the boot ROM would have left them in. Must run once,
/// before the first instruction executes.
pub fn apply_boot_registers(address_space: &mut AddressSpace, hardware_model: HardwareModel) {
    for (register, value) in BOOT_REGISTER_VALUES {
        address_space.write_address_u8(register.to_address(), value);
    }

    address_space.write_address_u8(
        IoRegister::NR52.to_address(),
        hardware_model.nr52_boot_value(),
    );

    log::info!("Applied post-boot register values for {hardware_model}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(address_space: &AddressSpace, register: IoRegister) -> u8 {
        address_space.read_address_u8(register.to_address())
    }

    #[test]
    fn no_side_effect_registers_in_table() {
        assert!(BOOT_REGISTER_VALUES
            .iter()
            .all(|(register, _)| !register.has_write_side_effect()));
    }

    #[test]
    fn applies_table() {
        let mut address_space = AddressSpace::new();
        apply_boot_registers(&mut address_space, HardwareModel::Dmg);

        for (register, value) in BOOT_REGISTER_VALUES {
            assert_eq!(value, read(&address_space, register), "{register:?}");
        }

        assert_eq!(0x91, read(&address_space, IoRegister::LCDC));
        assert_eq!(0xFC, read(&address_space, IoRegister::BGP));
        assert_eq!(0x77, read(&address_space, IoRegister::NR50));
    }

    #[test]
    fn nr52_depends_on_model() {
        let mut address_space = AddressSpace::new();

        apply_boot_registers(&mut address_space, HardwareModel::Dmg);
        assert_eq!(0xF1, read(&address_space, IoRegister::NR52));

        apply_boot_registers(&mut address_space, HardwareModel::Sgb);
        assert_eq!(0xF0, read(&address_space, IoRegister::NR52));
    }

    #[test]
    fn leaves_joypad_and_interrupt_registers_alone() {
        let mut address_space = AddressSpace::new();
        apply_boot_registers(&mut address_space, HardwareModel::Dmg);

        assert_eq!(0x00, read(&address_space, IoRegister::JOYP));
        assert_eq!(0x00, read(&address_space, IoRegister::IF));
        assert_eq!(0x00, read(&address_space, IoRegister::DMA));
    }
}
