//! Arity bounds for registered commands
//!
//! A command is declared with three integers `(first_key, last_key, key_step)`.
//! The host reads them as argument-count bounds, where the count excludes
//! the command name itself:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `first_key` | Minimum number of arguments |
//! | `last_key` | Maximum number of arguments, negative for unbounded |
//! | `key_step` | Width of the repeating group above the minimum |
//!
//! `(1, 1, 1)` accepts exactly one argument, `(0, 0, 0)` accepts none and
//! `(1, -1, 2)` accepts 1, 3, 5, ... arguments.

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};

/// Validated argument-count bounds.
///
/// Deserialization runs the same checks as [`Arity::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawArity")]
pub struct Arity {
    first_key: i32,
    last_key: i32,
    key_step: i32,
}

fn bounds_valid(first_key: i32, last_key: i32, key_step: i32) -> bool {
    let fixed = last_key >= 0 && last_key == first_key;
    first_key >= 0
        && (last_key < 0 || last_key >= first_key)
        && (key_step >= 1 || (fixed && key_step == 0))
}

#[derive(Deserialize)]
struct RawArity {
    first_key: i32,
    last_key: i32,
    key_step: i32,
}

impl TryFrom<RawArity> for Arity {
    type Error = String;

    fn try_from(raw: RawArity) -> Result<Self, Self::Error> {
        if !bounds_valid(raw.first_key, raw.last_key, raw.key_step) {
            return Err(format!(
                "invalid arity: first_key={}, last_key={}, key_step={}",
                raw.first_key, raw.last_key, raw.key_step
            ));
        }
        Ok(Self {
            first_key: raw.first_key,
            last_key: raw.last_key,
            key_step: raw.key_step,
        })
    }
}

impl Arity {
    /// Validate the declared bounds for `command`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidArity`] if `first_key` is negative, if a
    /// bounded `last_key` is below `first_key`, or if `key_step` is not
    /// positive while the bounds allow more than one count.
    pub fn new(command: &str, first_key: i32, last_key: i32, key_step: i32) -> LoadResult<Self> {
        if !bounds_valid(first_key, last_key, key_step) {
            return Err(LoadError::InvalidArity {
                command: command.to_string(),
                first_key,
                last_key,
                key_step,
            });
        }
        Ok(Self {
            first_key,
            last_key,
            key_step,
        })
    }

    /// Exactly `n` arguments.
    pub fn exactly(n: u16) -> Self {
        let n = i32::from(n);
        Self {
            first_key: n,
            last_key: n,
            key_step: 1,
        }
    }

    /// Minimum argument count.
    pub fn min(&self) -> usize {
        self.first_key as usize
    }

    /// Maximum argument count, `None` when unbounded.
    pub fn max(&self) -> Option<usize> {
        (self.last_key >= 0).then_some(self.last_key as usize)
    }

    /// Width of the repeating group.
    pub fn step(&self) -> usize {
        self.key_step as usize
    }

    /// The declared `(first_key, last_key, key_step)` triple.
    pub fn as_tuple(&self) -> (i32, i32, i32) {
        (self.first_key, self.last_key, self.key_step)
    }

    /// Returns true if a call with `argc` arguments satisfies the bounds.
    pub fn accepts(&self, argc: usize) -> bool {
        if argc < self.min() {
            return false;
        }
        if let Some(max) = self.max() {
            if argc > max {
                return false;
            }
        }
        match self.step() {
            0 => argc == self.min(),
            step => (argc - self.min()) % step == 0,
        }
    }
}
