//! Calendar permission bits.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Bit set of operations a principal may perform on a calendar.
    ///
    /// Serialized as its raw `u32`. Deserializing a value with bits outside
    /// [`CalendarPermissions::ALL`] fails.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct CalendarPermissions: u32 {
        /// Read objects.
        const READ   = 0b0_0001;
        /// Modify existing objects.
        const UPDATE = 0b0_0010;
        /// Create objects.
        const CREATE = 0b0_0100;
        /// Delete objects.
        const DELETE = 0b0_1000;
        /// Share the calendar.
        const SHARE  = 0b1_0000;
    }
}

impl CalendarPermissions {
    /// No access.
    pub const NONE: Self = Self::empty();
    /// Every permission.
    pub const ALL: Self = Self::all();

    /// Whether `UPDATE`, `CREATE` or `DELETE` is set.
    #[must_use]
    pub const fn is_writable(self) -> bool {
        self.intersects(Self::UPDATE.union(Self::CREATE).union(Self::DELETE))
    }
}

impl Default for CalendarPermissions {
    fn default() -> Self {
        Self::NONE
    }
}

impl Serialize for CalendarPermissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CalendarPermissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Self::from_bits(bits).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown calendar permission bits: {bits:#x}"))
        })
    }
}

impl fmt::Display for CalendarPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(CalendarPermissions, &str); 5] = [
            (CalendarPermissions::READ, "read"),
            (CalendarPermissions::UPDATE, "update"),
            (CalendarPermissions::CREATE, "create"),
            (CalendarPermissions::DELETE, "delete"),
            (CalendarPermissions::SHARE, "share"),
        ];
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}
