use crate::memory::{address, AddressSpace, MemoryError};

/// The five hardware interrupt lines, in IE/IF bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterruptLine {
    VBlank,
    LcdStatus,
    Timer,
    Serial,
    Joypad,
}

impl InterruptLine {
    /// All lines, highest servicing priority first.
    pub const PRIORITY_ORDER: [Self; 5] = [
        Self::VBlank,
        Self::LcdStatus,
        Self::Timer,
        Self::Serial,
        Self::Joypad,
    ];

    #[must_use]
    pub fn handler_address(self) -> u16 {
        match self {
            Self::VBlank => 0x0040,
            Self::LcdStatus => 0x0048,
            Self::Timer => 0x0050,
            Self::Serial => 0x0058,
            Self::Joypad => 0x0060,
        }
    }

    #[must_use]
    pub fn bit(self) -> u8 {
        match self {
            Self::VBlank => 0x01,
            Self::LcdStatus => 0x02,
            Self::Timer => 0x04,
            Self::Serial => 0x08,
            Self::Joypad => 0x10,
        }
    }
}

/// The CPU operations the interrupt controller needs in order to service an interrupt.
pub trait InterruptCpu {
    /// Push the current PC and jump to `vector`, as a CALL instruction would.
    ///
    /// # Errors
    ///
    /// Returns an error if pushing the return address writes past the end of the address space.
    fn call(&mut self, address_space: &mut AddressSpace, vector: u16) -> Result<(), MemoryError>;

    fn set_halted(&mut self, halted: bool);
}

/// Set the IF bit for the given line. This does not look at IE or IME.
pub fn request_interrupt(address_space: &mut AddressSpace, line: InterruptLine) {
    let if_value = address_space.read_address_u8(address::IF_REGISTER);
    address_space.write_address_u8(address::IF_REGISTER, if_value | line.bit());
}

fn acknowledge_interrupt(address_space: &mut AddressSpace, line: InterruptLine) {
    let if_value = address_space.read_address_u8(address::IF_REGISTER);
    address_space.write_address_u8(address::IF_REGISTER, if_value & !line.bit());
}

fn line_pending(address_space: &AddressSpace, line: InterruptLine) -> bool {
    let ie_value = address_space.read_address_u8(address::IE_REGISTER);
    let if_value = address_space.read_address_u8(address::IF_REGISTER);
    ie_value & if_value & line.bit() != 0
}

/// Owns the interrupt master enable flag (IME). IE and IF live in the address space and are read
/// fresh on every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptController {
    ime: bool,
}

impl InterruptController {
    #[must_use]
    pub fn new(ime: bool) -> Self {
        Self { ime }
    }

    #[must_use]
    pub fn ime(self) -> bool {
        self.ime
    }

    pub fn enable_interrupts(&mut self) {
        self.ime = true;
    }

    pub fn disable_interrupts(&mut self) {
        self.ime = false;
    }

    /// Evaluate every interrupt line in priority order.
    ///
    /// Any line that is both enabled and requested wakes the CPU from HALT, even with IME off. If
    /// IME was set when the check started, each such line also has its IF bit cleared and is
    /// dispatched to its vector. Lines are not short-circuited: two pending lines produce two
    /// back-to-back calls within the same check, and IME ends up cleared.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`InterruptCpu::call`]. The IF bit for the failing line has
    /// already been cleared and lower-priority lines are not evaluated.
    pub fn check_interrupts<C>(
        &mut self,
        address_space: &mut AddressSpace,
        cpu: &mut C,
    ) -> Result<(), MemoryError>
    where
        C: InterruptCpu + ?Sized,
    {
        let servicing_enabled = self.ime;

        for line in InterruptLine::PRIORITY_ORDER {
            if !line_pending(address_space, line) {
                continue;
            }

            cpu.set_halted(false);

            if servicing_enabled {
                acknowledge_interrupt(address_space, line);
                self.ime = false;

                log::trace!(
                    "Interrupt type {line:?} triggered, calling {:04X}",
                    line.handler_address()
                );
                cpu.call(address_space, line.handler_address())?;
            }
        }

        Ok(())
    }
}

impl Default for InterruptController {
    fn default() -> Self {
        Self::new(true)
    }
}
