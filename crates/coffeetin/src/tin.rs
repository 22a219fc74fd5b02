//! The tin: a fixed set of slots, each holding a bean or left vacant.

use std::fmt;
use std::str::FromStr;

use crate::{Bean, Rng, TinError};

/// Marker printed for a vacant slot.
pub const VACANT: char = '-';

/// A fixed-capacity container of beans.
///
/// Slots are never added or removed after construction. Drawing a bean
/// leaves its slot vacant; putting a bean back fills the first vacant
/// slot. Listing a tin shows every slot, so a finished game reads like
/// `[-, -, -, -, B]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tin {
    slots: Vec<Option<Bean>>,
}

impl Tin {
    /// Creates a tin with one occupied slot per bean.
    pub fn new(beans: impl IntoIterator<Item = Bean>) -> Self {
        Self {
            slots: beans.into_iter().map(Some).collect(),
        }
    }

    /// Creates a tin from raw slots, vacant ones included.
    pub fn from_slots(slots: Vec<Option<Bean>>) -> Self {
        Self { slots }
    }

    /// Returns the slots in order.
    pub fn slots(&self) -> &[Option<Bean>] {
        &self.slots
    }

    /// Returns the number of slots, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of beans in the tin.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns true if no bean is left.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns the number of beans of the given colour.
    pub fn count(&self, colour: Bean) -> usize {
        self.beans().filter(|&bean| bean == colour).count()
    }

    /// Returns the number of green beans.
    pub fn greens(&self) -> usize {
        self.count(Bean::Green)
    }

    /// Iterates over the beans in slot order, skipping vacant slots.
    pub fn beans(&self) -> impl Iterator<Item = Bean> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Returns true if at least two beans are left.
    pub fn has_at_least_two(&self) -> bool {
        self.beans().nth(1).is_some()
    }

    /// Removes a bean chosen uniformly among the occupied slots.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::Empty`] if the tin holds no bean.
    pub fn take_one<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Bean, TinError> {
        let occupied = self.len();
        if occupied == 0 {
            return Err(TinError::Empty);
        }

        let pick = rng.next_usize(occupied);
        let slot = self
            .slots
            .iter_mut()
            .filter(|slot| slot.is_some())
            .nth(pick)
            .ok_or(TinError::Empty)?;

        slot.take().ok_or(TinError::Empty)
    }

    /// Removes two beans, one after the other.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::Empty`] if fewer than two beans are left. The
    /// tin is left untouched in that case.
    pub fn take_two<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(Bean, Bean), TinError> {
        if !self.has_at_least_two() {
            return Err(TinError::Empty);
        }
        let first = self.take_one(rng)?;
        let second = self.take_one(rng)?;
        Ok((first, second))
    }

    /// Puts a bean into the first vacant slot.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::NoVacantSlot`] if every slot is occupied.
    pub fn put_in(&mut self, bean: Bean) -> Result<(), TinError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or(TinError::NoVacantSlot { capacity })?;
        *slot = Some(bean);
        Ok(())
    }

    /// Returns the slots as one code per slot, such as `"B-GG"`.
    ///
    /// Unlike the bracketed listing this needs no quoting on a command
    /// line, and it parses back into the same tin.
    pub fn compact(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.map_or(VACANT, Bean::as_char))
            .collect()
    }

    /// Returns some bean still in the tin, or `None` if it is empty.
    pub fn any_bean(&self) -> Option<Bean> {
        self.beans().next()
    }
}

impl fmt::Display for Tin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(bean) => write!(f, "{bean}")?,
                None => write!(f, "{VACANT}")?,
            }
        }
        write!(f, "]")
    }
}

/// Parses a compact listing such as `"BBBGG"` or `"B-G"`.
///
/// Whitespace, commas and brackets are ignored, so the output of
/// [`Display`](fmt::Display) parses back into the same tin.
impl FromStr for Tin {
    type Err = TinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut slots = Vec::with_capacity(s.len());
        for (position, ch) in s.chars().enumerate() {
            if ch.is_whitespace() || matches!(ch, ',' | '[' | ']') {
                continue;
            }
            if ch == VACANT {
                slots.push(None);
                continue;
            }
            let bean = Bean::from_char(ch).ok_or(TinError::InvalidBean { ch, position })?;
            slots.push(Some(bean));
        }
        Ok(Self { slots })
    }
}

impl FromIterator<Bean> for Tin {
    fn from_iter<I: IntoIterator<Item = Bean>>(iter: I) -> Self {
        Tin::new(iter)
    }
}
