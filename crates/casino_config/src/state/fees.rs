use serde::Serialize;

use crate::errors::{ConfigError, ConfigResult};

/// Hard ceiling on the creator fee enforced by the wagering protocol.
pub const CREATOR_FEE_CEILING: f64 = 0.05;

/// Fee fractions taken from every wager (0.01 = 1%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeParameters {
    /// Retained by the platform operator.
    pub creator_fee: f64,
    /// Routed to the shared jackpot.
    pub jackpot_fee: f64,
    /// Routed to the player's referrer.
    pub referral_fee: f64,
}

impl FeeParameters {
    pub fn new(creator_fee: f64, jackpot_fee: f64, referral_fee: f64) -> ConfigResult<Self> {
        let fees = Self {
            creator_fee,
            jackpot_fee,
            referral_fee,
        };
        fees.validate()?;
        Ok(fees)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for (fee, value) in [
            ("creator", self.creator_fee),
            ("jackpot", self.jackpot_fee),
            ("referral", self.referral_fee),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::FeeOutOfRange { fee, value });
            }
        }

        if self.creator_fee > CREATOR_FEE_CEILING {
            return Err(ConfigError::CreatorFeeTooHigh {
                value: self.creator_fee,
                ceiling: CREATOR_FEE_CEILING,
            });
        }

        let total = self.total();
        if total >= 1.0 {
            return Err(ConfigError::FeeSumTooHigh { total });
        }

        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.creator_fee + self.jackpot_fee + self.referral_fee
    }

    /// Basis points (100 = 1%), rounded to the nearest point.
    pub fn creator_fee_bps(&self) -> u16 {
        to_bps(self.creator_fee)
    }

    pub fn jackpot_fee_bps(&self) -> u16 {
        to_bps(self.jackpot_fee)
    }

    pub fn referral_fee_bps(&self) -> u16 {
        to_bps(self.referral_fee)
    }
}

fn to_bps(fraction: f64) -> u16 {
    // Validated fractions are below 1, so this stays under 10_000.
    (fraction * 10_000.0).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ceiling_exactly() {
        let fees = FeeParameters::new(CREATOR_FEE_CEILING, 0.0, 0.0).unwrap();
        assert_eq!(fees.creator_fee_bps(), 500);
    }

    #[test]
    fn rejects_creator_fee_above_ceiling() {
        let err = FeeParameters::new(0.0501, 0.001, 0.0025).unwrap_err();
        assert!(matches!(err, ConfigError::CreatorFeeTooHigh { .. }));
    }

    #[test]
    fn rejects_out_of_range_fees() {
        assert!(matches!(
            FeeParameters::new(0.01, -0.001, 0.0),
            Err(ConfigError::FeeOutOfRange { fee: "jackpot", .. })
        ));
        assert!(matches!(
            FeeParameters::new(0.01, 0.0, 1.0),
            Err(ConfigError::FeeOutOfRange { fee: "referral", .. })
        ));
        assert!(matches!(
            FeeParameters::new(f64::NAN, 0.0, 0.0),
            Err(ConfigError::FeeOutOfRange { fee: "creator", .. })
        ));
    }

    #[test]
    fn rejects_fee_sum_above_one() {
        let err = FeeParameters::new(0.05, 0.6, 0.4).unwrap_err();
        assert!(matches!(err, ConfigError::FeeSumTooHigh { .. }));
    }

    #[test]
    fn basis_point_views() {
        let fees = FeeParameters::new(0.0125, 0.001, 0.0025).unwrap();
        assert_eq!(fees.creator_fee_bps(), 125);
        assert_eq!(fees.jackpot_fee_bps(), 10);
        assert_eq!(fees.referral_fee_bps(), 25);
        assert!((fees.total() - 0.0160).abs() < 1e-12);
    }
}
