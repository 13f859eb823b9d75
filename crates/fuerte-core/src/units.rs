//! Gain units shared by every boost backend.
//!
//! Three small newtypes keep the unit conversions honest:
//!
//! - [`BoostMultiplier`] - what the user asks for (1.0x-4.0x)
//! - [`GainDb`] - what the curve produces (decibels)
//! - [`GainMillibels`] - what integer-scaled backends consume (1/1000 dB)
//!
//! Conversions are deterministic and lossy in exactly one documented place:
//! [`GainDb::to_millibels`] truncates fractional millibels toward zero.

use libm::expf;

/// Millibels per decibel (1 dB = 1000 mB).
pub const MILLIBELS_PER_DB: f32 = 1000.0;

/// User-facing loudness scaling factor. 1.0 = unmodified playback.
///
/// Construction clamps into the \[1.0, 4.0\] domain; invalid numeric input
/// (NaN) is treated as unity. There is deliberately no error path — the UI
/// slider must never be told "no".
///
/// # Example
///
/// ```rust
/// use fuerte_core::BoostMultiplier;
///
/// assert_eq!(BoostMultiplier::new(2.5).get(), 2.5);
/// assert_eq!(BoostMultiplier::new(0.3).get(), 1.0); // clamped up
/// assert_eq!(BoostMultiplier::new(9.0).get(), 4.0); // clamped down
/// assert_eq!(BoostMultiplier::new(f32::NAN).get(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BoostMultiplier(f32);

impl BoostMultiplier {
    /// Lowest boost: unmodified playback.
    pub const MIN: Self = Self(1.0);

    /// Highest boost the curve supports.
    pub const MAX: Self = Self(4.0);

    /// Unmodified playback (alias for [`Self::MIN`]).
    pub const UNITY: Self = Self(1.0);

    /// Clamps `raw` into \[1.0, 4.0\]. NaN becomes unity.
    pub fn new(raw: f32) -> Self {
        if raw.is_nan() {
            return Self::UNITY;
        }
        Self(raw.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The clamped multiplier value.
    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Default for BoostMultiplier {
    fn default() -> Self {
        Self::UNITY
    }
}

impl From<f32> for BoostMultiplier {
    fn from(raw: f32) -> Self {
        Self::new(raw)
    }
}

/// Backend-level amplification in decibels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GainDb(f32);

impl GainDb {
    /// Unity gain (no amplification).
    pub const ZERO: Self = Self(0.0);

    /// Wraps a decibel value.
    #[inline]
    pub const fn new(db: f32) -> Self {
        Self(db)
    }

    /// The gain in decibels.
    #[inline]
    pub const fn db(self) -> f32 {
        self.0
    }

    /// Converts to integer millibels, truncating fractional millibels
    /// toward zero (10.7506 dB -> 10750 mB).
    #[inline]
    pub fn to_millibels(self) -> GainMillibels {
        GainMillibels((self.0 * MILLIBELS_PER_DB) as i32)
    }

    /// Linear amplitude factor (0 dB -> 1.0, +6 dB -> ~2.0).
    #[inline]
    pub fn to_linear(self) -> f32 {
        // 10^(dB/20) = e^(dB * ln(10)/20)
        const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
        expf(self.0 * FACTOR)
    }
}

impl core::fmt::Display for GainDb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2} dB", self.0)
    }
}

/// Integer-scaled gain unit: 1/1000th of a decibel.
///
/// One backend family takes its target gain as a millibel integer; this
/// type carries that representation without losing the dB vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GainMillibels(i32);

impl GainMillibels {
    /// Unity gain.
    pub const ZERO: Self = Self(0);

    /// Wraps a millibel value.
    #[inline]
    pub const fn new(millibels: i32) -> Self {
        Self(millibels)
    }

    /// The raw millibel value.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Converts back to decibels.
    #[inline]
    pub fn to_db(self) -> GainDb {
        GainDb(self.0 as f32 / MILLIBELS_PER_DB)
    }
}

impl From<GainDb> for GainMillibels {
    fn from(db: GainDb) -> Self {
        db.to_millibels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_clamps_into_domain() {
        assert_eq!(BoostMultiplier::new(0.0).get(), 1.0);
        assert_eq!(BoostMultiplier::new(1.0).get(), 1.0);
        assert_eq!(BoostMultiplier::new(2.5).get(), 2.5);
        assert_eq!(BoostMultiplier::new(4.0).get(), 4.0);
        assert_eq!(BoostMultiplier::new(100.0).get(), 4.0);
        assert_eq!(BoostMultiplier::new(-3.0).get(), 1.0);
    }

    #[test]
    fn multiplier_nan_is_unity() {
        assert_eq!(BoostMultiplier::new(f32::NAN), BoostMultiplier::UNITY);
    }

    #[test]
    fn multiplier_infinities_clamp() {
        assert_eq!(BoostMultiplier::new(f32::INFINITY).get(), 4.0);
        assert_eq!(BoostMultiplier::new(f32::NEG_INFINITY).get(), 1.0);
    }

    #[test]
    fn millibel_conversion_exact_values() {
        assert_eq!(GainDb::new(0.0).to_millibels().get(), 0);
        assert_eq!(GainDb::new(6.0).to_millibels().get(), 6000);
        assert_eq!(GainDb::new(9.5).to_millibels().get(), 9500);
        assert_eq!(GainDb::new(12.0).to_millibels().get(), 12000);
    }

    #[test]
    fn millibel_conversion_truncates_toward_zero() {
        assert_eq!(GainDb::new(10.7506).to_millibels().get(), 10750);
        assert_eq!(GainDb::new(0.0009).to_millibels().get(), 0);
        assert_eq!(GainDb::new(-0.0009).to_millibels().get(), 0);
    }

    #[test]
    fn millibel_roundtrip_within_truncation() {
        let db = GainDb::new(7.3333);
        let back = db.to_millibels().to_db();
        assert!((db.db() - back.db()).abs() < 0.001, "lost more than 1 mB");
    }

    #[test]
    fn linear_known_values() {
        // 0 dB = 1.0 linear
        assert!((GainDb::ZERO.to_linear() - 1.0).abs() < 1e-6);
        // +6.0206 dB ≈ 2.0 linear
        assert!((GainDb::new(6.0206).to_linear() - 2.0).abs() < 0.001);
        // +12 dB ≈ 3.98 linear
        assert!((GainDb::new(12.0).to_linear() - 3.981).abs() < 0.001);
    }

    #[test]
    fn gain_db_display() {
        assert_eq!(GainDb::new(10.75).to_string(), "10.75 dB");
        assert_eq!(GainDb::ZERO.to_string(), "0.00 dB");
    }
}
