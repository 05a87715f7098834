//! Bit arithmetic for sub-byte register fields.
//!
//! All three helpers work in a 16 bit domain. Requests with a width outside `0..=16` or a start
//! outside `0..=15` produce an empty mask, and an empty mask turns extraction into `0` and
//! insertion into a no-op.

#[cfg(test)]
mod test;

/// `width` consecutive one bits, starting at bit `start`.
///
/// bits that would land above bit 15 are dropped.
pub fn mask(width: u8, start: u8) -> u16 {
    if width > 16 || start > 15 {
        return 0;
    }
    let ones = (1u32 << width) - 1;
    (ones << start) as u16
}

pub fn extract(value: u16, width: u8, start: u8) -> u16 {
    if width > 16 || start > 15 {
        return 0;
    }
    (value & mask(width, start)) >> start
}

/// Replace the `width` bits at `start` in `old` with the low bits of `field`.
///
/// excess high bits of `field` are discarded
pub fn insert(old: u16, field: u16, width: u8, start: u8) -> u16 {
    let mask = mask(width, start);
    if mask == 0 {
        return old;
    }
    (old & !mask) | ((field & (mask >> start)) << start)
}

/// Location of a field inside an 8 bit device register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub width: u8,
    pub start: u8,
}

impl Field {
    /// the whole register
    pub const BYTE: Field = Field::new(8, 0);

    pub const fn new(width: u8, start: u8) -> Self {
        Self { width, start }
    }

    /// Like [`Field::new`], but rejects fields that are empty or do not fit inside one byte.
    pub fn checked(width: u8, start: u8) -> Option<Self> {
        if width == 0 || width > 8 || start > 7 || width + start > 8 {
            return None;
        }
        Some(Self { width, start })
    }

    /// mask of this field, truncated to the register width
    pub fn mask(&self) -> u8 {
        mask(self.width, self.start) as u8
    }

    pub fn covers_byte(&self) -> bool {
        self.mask() == 0xFF
    }

    /// largest value the field can hold
    pub fn max(&self) -> u8 {
        self.mask().checked_shr(self.start as u32).unwrap_or(0)
    }

    pub fn extract(&self, register: u8) -> u8 {
        extract(register as u16, self.width, self.start) as u8
    }

    pub fn insert(&self, register: u8, value: u8) -> u8 {
        // anything shifted past bit 7 is cut off here
        insert(register as u16, value as u16, self.width, self.start) as u8
    }
}
