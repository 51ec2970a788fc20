// Dweve Wirebench - Wire Format Benchmarks
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Numeric values with a canonical integer representation.
//!
//! Wire formats disagree on how they tag integers: CBOR and MessagePack
//! decoders report small positive values as unsigned, BSON reports them as
//! signed, JSON picks whichever fits. A [`Number`] normalizes on
//! construction so two documents compare equal regardless of which decoder
//! produced them:
//!
//! - every non-negative integer is stored as `u64`
//! - every negative integer is stored as `i64`
//! - floats are always finite
//!
//! Integers and floats never compare equal to each other (`1 != 1.0`).

use serde::{Serialize, Serializer};
use std::fmt;

/// A finite JSON-compatible number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    n: N,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum N {
    /// Always >= 0.
    PosInt(u64),
    /// Always < 0.
    NegInt(i64),
    /// Always finite.
    Float(f64),
}

// Floats are finite, so equality is reflexive.
impl Eq for Number {}

impl Number {
    /// Creates a float number. Returns `None` for NaN and infinities, which
    /// the canonical text form cannot represent.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() {
            Some(Self { n: N::Float(value) })
        } else {
            None
        }
    }

    /// Creates an integer from a 128-bit value, if it fits in 64 bits.
    pub fn from_i128(value: i128) -> Option<Self> {
        if value >= 0 {
            u64::try_from(value).ok().map(Self::from)
        } else {
            i64::try_from(value).ok().map(Self::from)
        }
    }

    /// Creates an integer from an unsigned 128-bit value, if it fits in 64 bits.
    pub fn from_u128(value: u128) -> Option<Self> {
        u64::try_from(value).ok().map(Self::from)
    }

    /// Returns true for integers representable as `i64`.
    pub fn is_i64(&self) -> bool {
        match self.n {
            N::PosInt(v) => v <= i64::MAX as u64,
            N::NegInt(_) => true,
            N::Float(_) => false,
        }
    }

    /// Returns true for non-negative integers.
    pub fn is_u64(&self) -> bool {
        matches!(self.n, N::PosInt(_))
    }

    /// Returns true for floats.
    pub fn is_f64(&self) -> bool {
        matches!(self.n, N::Float(_))
    }

    /// Returns true for integers of either sign.
    pub fn is_integer(&self) -> bool {
        !self.is_f64()
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            N::PosInt(v) => i64::try_from(v).ok(),
            N::NegInt(v) => Some(v),
            N::Float(_) => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            N::PosInt(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers are converted (possibly lossy).
    pub fn as_f64(&self) -> f64 {
        match self.n {
            N::PosInt(v) => v as f64,
            N::NegInt(v) => v as f64,
            N::Float(v) => v,
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self { n: N::PosInt(value) }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        if value >= 0 {
            Self {
                n: N::PosInt(value as u64),
            }
        } else {
            Self { n: N::NegInt(value) }
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::from(value as u64)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::from(value as i64)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, usize);
impl_from_signed!(i8, i16, i32, isize);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.n {
            N::PosInt(v) => write!(f, "{}", v),
            N::NegInt(v) => write!(f, "{}", v),
            // Debug keeps the fractional marker (`1.0` rather than `1`).
            N::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.n {
            N::PosInt(v) => serializer.serialize_u64(v),
            N::NegInt(v) => serializer.serialize_i64(v),
            N::Float(v) => serializer.serialize_f64(v),
        }
    }
}
