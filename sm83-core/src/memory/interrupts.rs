use bitflags::bitflags;

/// Interrupt sources ordered by priority, `Vblank` is the highest.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InterruptType {
    Vblank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl InterruptType {
    /// The address the CPU jumps to when servicing this interrupt
    pub fn vector(&self) -> u16 {
        0x40 + (*self as u16) * 8
    }

    pub fn bit(&self) -> u8 {
        InterruptsFlags::from(*self).bits()
    }

    /// The highest priority interrupt in a pending mask (`IE & IF`), the
    /// lowest set bit wins and bits 5-7 are ignored
    pub fn from_pending(pending: u8) -> Option<Self> {
        (0..5u8)
            .find(|&bit| pending & (1 << bit) != 0)
            .and_then(|bit| Self::try_from(bit).ok())
    }
}

impl TryFrom<u8> for InterruptType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Vblank),
            1 => Ok(Self::LcdStat),
            2 => Ok(Self::Timer),
            3 => Ok(Self::Serial),
            4 => Ok(Self::Joypad),
            _ => Err(()),
        }
    }
}

/// Implemented by anything that external signal sources (timer, serial,
/// video, input) can use to raise a request in `IF`.
pub trait InterruptManager {
    fn request_interrupt(&mut self, interrupt: InterruptType);
}

bitflags! {
    struct InterruptsFlags: u8 {
        /// Not backed by hardware, always read as 1 in `IF`
        const UNUSED   = 0b111 << 5;
        const VBLANK   = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER    = 1 << 2;
        const SERIAL   = 1 << 3;
        const JOYPAD   = 1 << 4;
    }
}

impl From<InterruptType> for InterruptsFlags {
    fn from(interrupt: InterruptType) -> Self {
        match interrupt {
            InterruptType::Vblank => Self::VBLANK,
            InterruptType::LcdStat => Self::LCD_STAT,
            InterruptType::Timer => Self::TIMER,
            InterruptType::Serial => Self::SERIAL,
            InterruptType::Joypad => Self::JOYPAD,
        }
    }
}

/// Storage for the `IE` (0xFFFF) and `IF` (0xFF0F) registers.
///
/// `IE` keeps all 8 bits as written, `IF` always has its top 3 bits set.
pub struct Interrupts {
    enabled: u8,
    requested: InterruptsFlags,
}

impl Default for Interrupts {
    fn default() -> Self {
        Self {
            enabled: 0,
            requested: InterruptsFlags::UNUSED,
        }
    }
}

impl Interrupts {
    pub fn write_interrupt_enable(&mut self, data: u8) {
        self.enabled = data;
    }

    pub fn read_interrupt_enable(&self) -> u8 {
        self.enabled
    }

    pub fn write_interrupt_flags(&mut self, data: u8) {
        self.requested = InterruptsFlags::from_bits_truncate(data) | InterruptsFlags::UNUSED;
    }

    pub fn read_interrupt_flags(&self) -> u8 {
        self.requested.bits()
    }

    /// The highest priority interrupt that is both enabled and requested
    pub fn get_highest_interrupt(&self) -> Option<InterruptType> {
        InterruptType::from_pending(self.requested.bits() & self.enabled)
    }
}

impl InterruptManager for Interrupts {
    fn request_interrupt(&mut self, interrupt: InterruptType) {
        self.requested.insert(interrupt.into());
    }
}
