//! Capability vector (RWXD) using bitflags.
//!
//! Every grant carries two of these vectors, one for allow and one for deny.
//! The four bits are independent; there is no ordering invariant among them.

use bitflags::bitflags;

bitflags! {
    /// The four capability axes as a bitfield.
    ///
    /// Stored as BIGINT in PostgreSQL alongside the grant rows.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct Capabilities: u8 {
        /// Permission to read a resource
        const READ    = 1 << 0;
        /// Permission to write (create or update) a resource
        const WRITE   = 1 << 1;
        /// Permission to execute an approve-type action on a resource
        const EXECUTE = 1 << 2;
        /// Permission to delete a resource
        const DELETE  = 1 << 3;
    }
}

impl Capabilities {
    // === Database Conversion ===

    /// Create a capability vector from a database BIGINT value.
    ///
    /// Unknown bits are silently ignored to maintain forward compatibility.
    #[must_use]
    pub const fn from_db(value: i64) -> Self {
        Self::from_bits_truncate(value as u8)
    }

    /// Convert the vector to a database BIGINT value.
    #[must_use]
    pub const fn to_db(self) -> i64 {
        self.bits() as i64
    }

    // === Capability Letters ===

    /// Map a requested capability letter to its vector bit.
    ///
    /// Returns `None` for any letter outside `{R, W, X, D}`; callers must
    /// treat that as a denial, never as an empty capability.
    ///
    /// # Examples
    ///
    /// ```
    /// use bo_server::permissions::Capabilities;
    ///
    /// assert_eq!(Capabilities::from_letter('R'), Some(Capabilities::READ));
    /// assert_eq!(Capabilities::from_letter('Z'), None);
    /// ```
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(Self::READ),
            'W' => Some(Self::WRITE),
            'X' => Some(Self::EXECUTE),
            'D' => Some(Self::DELETE),
            _ => None,
        }
    }

    /// Render the vector as its capability letters, e.g. `"RW"`.
    ///
    /// Used in denial diagnostics and log lines.
    #[must_use]
    pub fn letters(self) -> String {
        let mut out = String::with_capacity(4);
        for (flag, letter) in [
            (Self::READ, 'R'),
            (Self::WRITE, 'W'),
            (Self::EXECUTE, 'X'),
            (Self::DELETE, 'D'),
        ] {
            if self.contains(flag) {
                out.push(letter);
            }
        }
        out
    }

    /// Check if this vector includes the specified capability bit(s).
    ///
    /// # Examples
    ///
    /// ```
    /// use bo_server::permissions::Capabilities;
    ///
    /// let caps = Capabilities::READ | Capabilities::WRITE;
    /// assert!(caps.has(Capabilities::READ));
    /// assert!(!caps.has(Capabilities::DELETE));
    /// ```
    #[must_use]
    pub const fn has(self, capability: Self) -> bool {
        self.contains(capability)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_bits() {
        assert_eq!(Capabilities::READ.bits(), 1 << 0);
        assert_eq!(Capabilities::WRITE.bits(), 1 << 1);
        assert_eq!(Capabilities::EXECUTE.bits(), 1 << 2);
        assert_eq!(Capabilities::DELETE.bits(), 1 << 3);
    }

    #[test]
    fn test_from_letter_known() {
        assert_eq!(Capabilities::from_letter('R'), Some(Capabilities::READ));
        assert_eq!(Capabilities::from_letter('W'), Some(Capabilities::WRITE));
        assert_eq!(Capabilities::from_letter('X'), Some(Capabilities::EXECUTE));
        assert_eq!(Capabilities::from_letter('D'), Some(Capabilities::DELETE));
    }

    #[test]
    fn test_from_letter_unknown() {
        assert_eq!(Capabilities::from_letter('Z'), None);
        assert_eq!(Capabilities::from_letter('r'), None);
        assert_eq!(Capabilities::from_letter(' '), None);
    }

    #[test]
    fn test_letters_rendering() {
        assert_eq!((Capabilities::READ | Capabilities::WRITE).letters(), "RW");
        assert_eq!(Capabilities::all().letters(), "RWXD");
        assert_eq!(Capabilities::empty().letters(), "");
    }

    #[test]
    fn test_db_roundtrip() {
        let caps = Capabilities::READ | Capabilities::DELETE;
        assert_eq!(Capabilities::from_db(caps.to_db()), caps);
    }

    #[test]
    fn test_from_db_ignores_unknown_bits() {
        let value = 0b1111_0000 | Capabilities::READ.to_db();
        assert_eq!(Capabilities::from_db(value), Capabilities::READ);
    }
}
