// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print Color: interaction-state keyed colors.
//!
//! An icon is painted with a single color at any moment, but which color
//! depends on how the user is interacting with the widget that hosts it.
//! This crate models that as:
//!
//! - [`InteractionState`]: the set of active flags (selected, focused,
//!   pressed, enabled). The empty set is the *normal* state.
//! - [`ColorStateSpec`]: either one solid color, or a list of
//!   `(flags, color)` entries that always includes a normal entry.
//!
//! Resolution is a pure function of the spec and the active flags:
//!
//! ```rust
//! use peniko::Color;
//! use print_color::{ColorStateSpec, InteractionState};
//!
//! let black = Color::from_rgb8(0, 0, 0);
//! let red = Color::from_rgb8(0xFF, 0, 0);
//! let spec = ColorStateSpec::builder()
//!     .normal(black)
//!     .selected(red)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(spec.resolve(InteractionState::SELECTED), red);
//! assert_eq!(spec.resolve(InteractionState::NORMAL), black);
//! // No exact entry: the closest entry whose flags are all active wins.
//! assert_eq!(
//!     spec.resolve(InteractionState::SELECTED | InteractionState::PRESSED),
//!     red
//! );
//! assert!(spec.is_stateful());
//! ```
//!
//! A keyed spec without a normal entry is rejected when it is built, with
//! [`UnresolvedColorState`], so resolution itself never fails.
//!
//! This crate is `no_std`.

#![no_std]

use bitflags::bitflags;
use peniko::Color;
use smallvec::SmallVec;

bitflags! {
    /// Interaction flags reported by the widget hosting an icon.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionState: u8 {
        /// The host is selected.
        const SELECTED = 1 << 0;
        /// The host has keyboard focus.
        const FOCUSED = 1 << 1;
        /// The host is being pressed.
        const PRESSED = 1 << 2;
        /// The host accepts input.
        const ENABLED = 1 << 3;
    }
}

impl InteractionState {
    /// The normal state: no flags active.
    pub const NORMAL: Self = Self::empty();

    /// Number of active flags.
    #[inline]
    pub fn specificity(self) -> u32 {
        self.bits().count_ones()
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Error returned when a keyed color spec has no entry for the normal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("color state list has no entry for the normal state")]
pub struct UnresolvedColorState;

/// One `(flags, color)` pair of a keyed color spec.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorStateEntry {
    /// Flags that must all be active for this entry to apply.
    pub states: InteractionState,
    /// Color used when this entry is selected.
    pub color: Color,
}

impl ColorStateEntry {
    /// Create a new entry.
    #[inline]
    pub const fn new(states: InteractionState, color: Color) -> Self {
        Self { states, color }
    }
}

type Entries = SmallVec<[ColorStateEntry; 4]>;

#[derive(Clone, Debug, PartialEq)]
enum Repr {
    Solid(Color),
    Keyed { entries: Entries, normal: Color },
}

/// Color specification bound to interaction states.
///
/// Specs are immutable; replace the whole spec to change it.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStateSpec {
    repr: Repr,
}

impl ColorStateSpec {
    /// A spec that uses `color` regardless of state.
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self {
            repr: Repr::Solid(color),
        }
    }

    /// Start building a keyed spec.
    #[inline]
    pub fn builder() -> ColorStateSpecBuilder {
        ColorStateSpecBuilder::default()
    }

    /// Build a keyed spec from `(flags, color)` entries.
    ///
    /// When the same flags appear more than once, the first declaration
    /// wins. Fails if no entry has empty flags.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ColorStateEntry>,
    ) -> Result<Self, UnresolvedColorState> {
        let mut kept = Entries::new();
        for entry in entries {
            if !kept.iter().any(|e| e.states == entry.states) {
                kept.push(entry);
            }
        }
        let normal = kept
            .iter()
            .find(|e| e.states == InteractionState::NORMAL)
            .map(|e| e.color)
            .ok_or(UnresolvedColorState)?;
        Ok(Self {
            repr: Repr::Keyed {
                entries: kept,
                normal,
            },
        })
    }

    /// Resolve the active color for `state`.
    ///
    /// - A solid spec returns its color.
    /// - A keyed spec returns the entry whose flags equal `state` exactly;
    ///   otherwise the entry with the most flags that are all active in
    ///   `state` (earliest declaration on ties); otherwise the normal entry.
    pub fn resolve(&self, state: InteractionState) -> Color {
        match &self.repr {
            Repr::Solid(color) => *color,
            Repr::Keyed { entries, normal } => {
                let mut best: Option<&ColorStateEntry> = None;
                for entry in entries {
                    if entry.states == state {
                        return entry.color;
                    }
                    if state.contains(entry.states)
                        && best.is_none_or(|b| entry.states.specificity() > b.states.specificity())
                    {
                        best = Some(entry);
                    }
                }
                best.map_or(*normal, |e| e.color)
            }
        }
    }

    /// Returns `true` if the spec maps at least two states to different
    /// colors.
    ///
    /// Owners use this to skip re-resolving when the state changes.
    pub fn is_stateful(&self) -> bool {
        match &self.repr {
            Repr::Solid(_) => false,
            Repr::Keyed { entries, normal } => entries.iter().any(|e| e.color != *normal),
        }
    }

    /// The color used in the normal state.
    pub fn normal_color(&self) -> Color {
        match &self.repr {
            Repr::Solid(color) => *color,
            Repr::Keyed { normal, .. } => *normal,
        }
    }

    /// The color of a solid spec.
    pub fn as_solid(&self) -> Option<Color> {
        match &self.repr {
            Repr::Solid(color) => Some(*color),
            Repr::Keyed { .. } => None,
        }
    }

    /// Entries of a keyed spec, in declaration order. Empty for a solid spec.
    pub fn entries(&self) -> &[ColorStateEntry] {
        match &self.repr {
            Repr::Solid(_) => &[],
            Repr::Keyed { entries, .. } => entries.as_slice(),
        }
    }
}

impl From<Color> for ColorStateSpec {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

/// Builder for keyed [`ColorStateSpec`]s.
#[derive(Clone, Debug, Default)]
pub struct ColorStateSpecBuilder {
    entries: Entries,
}

impl ColorStateSpecBuilder {
    /// Add an entry for an arbitrary flag combination.
    pub fn state(mut self, states: InteractionState, color: Color) -> Self {
        self.entries.push(ColorStateEntry::new(states, color));
        self
    }

    /// Color for the normal state.
    pub fn normal(self, color: Color) -> Self {
        self.state(InteractionState::NORMAL, color)
    }

    /// Color while selected.
    pub fn selected(self, color: Color) -> Self {
        self.state(InteractionState::SELECTED, color)
    }

    /// Color while focused.
    pub fn focused(self, color: Color) -> Self {
        self.state(InteractionState::FOCUSED, color)
    }

    /// Color while pressed.
    pub fn pressed(self, color: Color) -> Self {
        self.state(InteractionState::PRESSED, color)
    }

    /// Color while enabled.
    pub fn enabled(self, color: Color) -> Self {
        self.state(InteractionState::ENABLED, color)
    }

    /// Finish the spec. See [`ColorStateSpec::from_entries`].
    pub fn build(self) -> Result<ColorStateSpec, UnresolvedColorState> {
        ColorStateSpec::from_entries(self.entries)
    }
}

/// Convert a packed `0xAARRGGBB` value into a color.
pub fn color_from_argb(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::from_rgba8(r, g, b, a)
}

/// Convert a packed opaque `0xRRGGBB` value into a color.
pub fn color_from_rgb(rgb: u32) -> Color {
    let [_, r, g, b] = rgb.to_be_bytes();
    Color::from_rgb8(r, g, b)
}
