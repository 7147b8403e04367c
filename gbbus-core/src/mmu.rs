use crate::config::MmuConfig;
use crate::initialization;
use crate::input::Joypad;
use crate::interrupts::{self, InterruptController, InterruptCpu, InterruptLine};
use crate::memory::{AddressSpace, MemoryError};
use std::ops::Range;

/// Sole owner of the address space and interrupt state for the lifetime of an emulator. Pass it
/// explicitly to whatever needs to touch memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mmu {
    address_space: AddressSpace,
    interrupt_controller: InterruptController,
    config: MmuConfig,
}

impl Mmu {
    #[must_use]
    pub fn new(config: MmuConfig) -> Self {
        let mut mmu = Self {
            address_space: AddressSpace::new(),
            interrupt_controller: InterruptController::new(config.interrupts_enabled_at_startup),
            config,
        };
        mmu.apply_startup_state();

        mmu
    }

    fn apply_startup_state(&mut self) {
        if self.config.apply_boot_registers {
            initialization::apply_boot_registers(
                &mut self.address_space,
                self.config.hardware_model,
            );
        }
    }

    /// Return to power-on state. The loaded ROM stays mapped.
    pub fn reset(&mut self) {
        self.address_space.reset();
        self.interrupt_controller =
            InterruptController::new(self.config.interrupts_enabled_at_startup);
        self.apply_startup_state();

        log::debug!("MMU reset with config:\n{}", self.config);
    }

    #[must_use]
    pub fn config(&self) -> &MmuConfig {
        &self.config
    }

    pub fn load_rom(&mut self, rom: &[u8]) {
        self.address_space.load_rom(rom);
    }

    #[must_use]
    pub fn address_space(&self) -> &AddressSpace {
        &self.address_space
    }

    pub fn address_space_mut(&mut self) -> &mut AddressSpace {
        &mut self.address_space
    }

    #[must_use]
    pub fn read(&self, address: u16) -> u8 {
        self.address_space.read_address_u8(address)
    }

    /// Read a little-endian word.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::AddressOutOfRange`] if `address` is `0xFFFF`.
    pub fn read_u16(&self, address: u16) -> Result<u16, MemoryError> {
        self.address_space.read_address_u16(address)
    }

    /// Iterate over the bytes in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::AddressOutOfRange`] if `range.end` is past `0x10000`.
    pub fn read_range(
        &self,
        range: Range<u32>,
    ) -> Result<impl Iterator<Item = u8> + '_, MemoryError> {
        self.address_space.read_range(range)
    }

    pub fn write(&mut self, address: u16, value: u8) {
        self.address_space.write_address_u8(address, value);
    }

    /// Write `low` then `high` at consecutive addresses, each through the write dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::AddressOutOfRange`] if `address` is `0xFFFF`.
    pub fn write_pair(&mut self, address: u16, high: u8, low: u8) -> Result<(), MemoryError> {
        self.address_space.write_address_pair(address, high, low)
    }

    /// Write a little-endian word, each byte through the write dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::AddressOutOfRange`] if `address` is `0xFFFF`.
    pub fn write_u16(&mut self, address: u16, value: u16) -> Result<(), MemoryError> {
        self.address_space.write_address_u16(address, value)
    }

    pub fn joypad(&mut self) -> Joypad<'_> {
        self.address_space.joypad()
    }

    /// Service pending interrupts against the owned address space.
    ///
    /// # Errors
    ///
    /// Propagates any error from the CPU's [`InterruptCpu::call`].
    pub fn check_interrupts<C>(&mut self, cpu: &mut C) -> Result<(), MemoryError>
    where
        C: InterruptCpu + ?Sized,
    {
        self.interrupt_controller
            .check_interrupts(&mut self.address_space, cpu)
    }

    pub fn set_interrupt(&mut self, line: InterruptLine) {
        interrupts::request_interrupt(&mut self.address_space, line);
    }

    #[must_use]
    pub fn interrupts_enabled(&self) -> bool {
        self.interrupt_controller.ime()
    }

    pub fn enable_interrupts(&mut self) {
        self.interrupt_controller.enable_interrupts();
    }

    pub fn disable_interrupts(&mut self) {
        self.interrupt_controller.disable_interrupts();
    }
}

impl Default for Mmu {
    fn default() -> Self {
        Self::new(MmuConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HardwareModel;
    use crate::input::{Button, Direction};
    use crate::memory::address;

    // Minimal CPU that pushes PC onto a stack in memory, enough to observe interrupt dispatch
    // through the address space
    struct StackCpu {
        pc: u16,
        sp: u16,
        halted: bool,
    }

    impl InterruptCpu for StackCpu {
        fn call(&mut self, address_space: &mut AddressSpace, vector: u16) -> Result<(), MemoryError> {
            self.sp = self.sp.wrapping_sub(2);
            address_space.write_address_u16(self.sp, self.pc)?;
            self.pc = vector;
            Ok(())
        }

        fn set_halted(&mut self, halted: bool) {
            self.halted = halted;
        }
    }

    #[test]
    fn new_applies_boot_registers() {
        let mmu = Mmu::default();

        assert_eq!(0x91, mmu.read(address::LCDC_REGISTER));
        assert_eq!(0xF1, mmu.read(0xFF26));
        assert!(mmu.interrupts_enabled());
    }

    #[test]
    fn boot_registers_can_be_skipped() {
        let mmu = Mmu::new(MmuConfig {
            apply_boot_registers: false,
            interrupts_enabled_at_startup: false,
            ..MmuConfig::default()
        });

        assert_eq!(0x00, mmu.read(address::LCDC_REGISTER));
        assert!(!mmu.interrupts_enabled());
    }

    #[test]
    fn sgb_model() {
        let mmu = Mmu::new(MmuConfig {
            hardware_model: HardwareModel::Sgb,
            ..MmuConfig::default()
        });

        assert_eq!(0xF0, mmu.read(0xFF26));
    }

    #[test]
    fn joypad_press_wakes_halted_cpu_and_dispatches() {
        let mut mmu = Mmu::default();
        mmu.write(address::IE_REGISTER, InterruptLine::Joypad.bit());

        let mut cpu = StackCpu {
            pc: 0x1234,
            sp: 0xFFFE,
            halted: true,
        };

        mmu.joypad().press_button(Button::Start);
        mmu.check_interrupts(&mut cpu).unwrap();

        assert!(!cpu.halted);
        assert_eq!(0x0060, cpu.pc);
        assert_eq!(0xFFFC, cpu.sp);
        assert_eq!(Ok(0x1234), mmu.read_u16(0xFFFC));
        assert_eq!(0x00, mmu.read(address::IF_REGISTER));
        assert!(!mmu.interrupts_enabled());

        // Serviced and IME cleared, so nothing further happens until interrupts are re-enabled
        mmu.joypad().press_direction(Direction::Down);
        mmu.check_interrupts(&mut cpu).unwrap();
        assert_eq!(0x0060, cpu.pc);
        assert_eq!(0xFFFC, cpu.sp);

        mmu.enable_interrupts();
        mmu.check_interrupts(&mut cpu).unwrap();
        assert_eq!(0xFFFA, cpu.sp);
        assert_eq!(Ok(0x0060), mmu.read_u16(0xFFFA));
    }

    #[test]
    fn set_interrupt_accumulates() {
        let mut mmu = Mmu::default();

        mmu.set_interrupt(InterruptLine::Timer);
        mmu.set_interrupt(InterruptLine::VBlank);

        assert_eq!(0x05, mmu.read(address::IF_REGISTER));
    }

    #[test]
    fn reset_keeps_rom() {
        let mut mmu = Mmu::default();
        mmu.load_rom(&[0x31, 0xFE, 0xFF]);
        mmu.write(0xC000, 0x99);
        mmu.write(address::LCDC_REGISTER, 0x00);
        mmu.joypad().press_button(Button::A);
        mmu.disable_interrupts();

        mmu.reset();

        assert_eq!(0xFE, mmu.read(0x0001));
        assert_eq!(0x00, mmu.read(0xC000));
        assert_eq!(0x91, mmu.read(address::LCDC_REGISTER));
        assert_eq!(0x00, mmu.read(address::IF_REGISTER));
        assert_eq!(0xDF, mmu.address_space().joypad_state().buttons());
        assert!(mmu.interrupts_enabled());
    }

    #[test]
    fn facade_range_and_word_access() {
        let mut mmu = Mmu::default();

        mmu.write_pair(0xD000, 0xBE, 0xEF).unwrap();
        mmu.write_u16(0xD002, 0xCAFE).unwrap();

        let bytes: Vec<_> = mmu.read_range(0xD000..0xD004).unwrap().collect();
        assert_eq!(vec![0xEF, 0xBE, 0xFE, 0xCA], bytes);
    }

    #[test]
    fn facade_reports_out_of_range_word_access() {
        let mut mmu = Mmu::default();
        let out_of_range = MemoryError::AddressOutOfRange { address: 0x10000 };

        assert_eq!(Err(out_of_range), mmu.read_u16(address::IE_REGISTER));
        assert_eq!(
            Err(out_of_range),
            mmu.write_pair(address::IE_REGISTER, 0x12, 0x1F)
        );
        assert_eq!(Err(out_of_range), mmu.write_u16(address::IE_REGISTER, 0x121F));
        assert!(mmu.read_range(0xFF00..0x10001).is_err());

        // Low byte still lands before the failure
        assert_eq!(0x1F, mmu.read(address::IE_REGISTER));
    }
}
