//! Permission-like mode labels.
//!
//! A mode is nine bits (owner/group/other × read/write/execute). Nothing in
//! vfsh checks it; `chmod` only relabels a node.

use std::fmt;
use std::str::FromStr;

use super::VfsError;

/// Nine-bit permission label, always `<= 0o777`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(u16);

impl Mode {
    /// Default for directories.
    pub const DIRECTORY: Mode = Mode(0o755);
    /// Default for files.
    pub const FILE: Mode = Mode(0o644);
    /// Largest representable mode.
    pub const MAX: u16 = 0o777;

    /// Build a mode from raw bits, rejecting anything above `0o777`.
    pub fn new(bits: u16) -> Option<Self> {
        (bits <= Self::MAX).then_some(Mode(bits))
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// Parse a mode string. Modes are always octal.
    ///
    /// Accepts an optional `0o` prefix and any number of leading zeros;
    /// every digit must be `0`-`7` and the value must fit in nine bits.
    ///
    /// ```
    /// use vfsh_kernel::vfs::Mode;
    ///
    /// assert_eq!(Mode::parse("755").unwrap().bits(), 0o755);
    /// assert_eq!(Mode::parse("0o644").unwrap().bits(), 0o644);
    /// assert!(Mode::parse("999").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, VfsError> {
        let invalid = || VfsError::InvalidMode(s.to_string());

        let digits = s.strip_prefix("0o").unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| matches!(b, b'0'..=b'7')) {
            return Err(invalid());
        }

        // Leading zeros are fine; strip them so long strings like 0000755 still parse.
        let significant = digits.trim_start_matches('0');
        if significant.len() > 3 {
            return Err(invalid());
        }
        if significant.is_empty() {
            return Ok(Mode(0));
        }

        let bits = u16::from_str_radix(significant, 8).map_err(|_| invalid())?;
        Mode::new(bits).ok_or_else(invalid)
    }

    /// `rwxr-xr-x` style rendering.
    pub fn symbolic(self) -> String {
        let mut out = String::with_capacity(9);
        for shift in [6, 3, 0] {
            let who = (self.0 >> shift) & 0b111;
            out.push(if who & 0b100 != 0 { 'r' } else { '-' });
            out.push(if who & 0b010 != 0 { 'w' } else { '-' });
            out.push(if who & 0b001 != 0 { 'x' } else { '-' });
        }
        out
    }
}

impl FromStr for Mode {
    type Err = VfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::parse(s)
    }
}

/// Renders as `0755 (rwxr-xr-x)`.
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o} ({})", self.0, self.symbolic())
    }
}
