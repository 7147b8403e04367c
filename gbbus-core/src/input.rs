use crate::interrupts::{self, InterruptLine};
use crate::memory::{address, AddressSpace};

/// Action buttons, read through JOYP when bit 5 of the select byte is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    Select,
    Start,
}

impl Button {
    /// Single-bit-clear mask for this button's line.
    #[must_use]
    pub fn mask(self) -> u8 {
        match self {
            Self::A => 0xFE,
            Self::B => 0xFD,
            Self::Select => 0xFB,
            Self::Start => 0xF7,
        }
    }
}

/// D-pad directions, read through JOYP when bit 4 of the select byte is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Single-bit-clear mask for this direction's line.
    #[must_use]
    pub fn mask(self) -> u8 {
        match self {
            Self::Right => 0xFE,
            Self::Left => 0xFD,
            Self::Up => 0xFB,
            Self::Down => 0xF7,
        }
    }
}

/// Active-low line state for both joypad groups. A cleared bit means the line is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoypadState {
    buttons: u8,
    dpad: u8,
}

impl JoypadState {
    // Upper nibbles identify the select pin of each group (pin 15 for buttons, pin 14 for the d-pad)
    const BUTTONS_RELEASED: u8 = 0xDF;
    const DPAD_RELEASED: u8 = 0xEF;

    #[must_use]
    pub fn new() -> Self {
        Self {
            buttons: Self::BUTTONS_RELEASED,
            dpad: Self::DPAD_RELEASED,
        }
    }

    #[must_use]
    pub fn buttons(self) -> u8 {
        self.buttons
    }

    #[must_use]
    pub fn dpad(self) -> u8 {
        self.dpad
    }

    /// Compute the JOYP value the CPU sees after writing `select`. Bit 4 selects the d-pad, bit 5
    /// selects the buttons; when both are set the two groups are ANDed together.
    #[must_use]
    pub fn joyp_value(self, select: u8) -> u8 {
        let mut lines = 0x0F;
        if select & 0x10 != 0 {
            lines &= self.dpad;
        }
        if select & 0x20 != 0 {
            lines &= self.buttons;
        }

        lines | (select & 0xF0)
    }
}

impl Default for JoypadState {
    fn default() -> Self {
        Self::new()
    }
}

/// Input controller view over the address space. Presses request the joypad interrupt; releases
/// never do.
pub struct Joypad<'a>(&'a mut AddressSpace);

impl<'a> Joypad<'a> {
    #[must_use]
    pub fn new(address_space: &'a mut AddressSpace) -> Self {
        Self(address_space)
    }

    pub fn press_button(&mut self, button: Button) {
        self.0.joypad_state.buttons &= button.mask();
        log::debug!("Button pressed: {button:?}, current state: {:?}", self.0.joypad_state);

        interrupts::request_interrupt(self.0, InterruptLine::Joypad);
    }

    pub fn release_button(&mut self, button: Button) {
        self.0.joypad_state.buttons |= !button.mask();
        log::debug!("Button released: {button:?}, current state: {:?}", self.0.joypad_state);
    }

    pub fn press_direction(&mut self, direction: Direction) {
        self.0.joypad_state.dpad &= direction.mask();
        log::debug!("Direction pressed: {direction:?}, current state: {:?}", self.0.joypad_state);

        interrupts::request_interrupt(self.0, InterruptLine::Joypad);
    }

    pub fn release_direction(&mut self, direction: Direction) {
        self.0.joypad_state.dpad |= !direction.mask();
        log::debug!("Direction released: {direction:?}, current state: {:?}", self.0.joypad_state);
    }

    /// Recompute the JOYP register for the given select byte and store it. This is the handler for
    /// CPU writes to JOYP, so the result bypasses the write dispatch.
    pub fn update_joyp(&mut self, select: u8) {
        let value = self.0.joypad_state.joyp_value(select);
        self.0.store_raw(address::JOYPAD_REGISTER, value);
    }
}
