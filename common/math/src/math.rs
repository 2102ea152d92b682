#![no_std]

use core::cmp::Ordering;

use common_constants::{BPS_PRECISION, WAD, WAD_PRECISION};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SharedMathModule {
    /// Exact product of both operands, truncated to `precision`.
    ///
    /// The operands keep their own scale, so no digits are dropped before the
    /// multiplication.
    fn mul_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let product = a.into_raw_units() * b.into_raw_units();
        let product_scale = a.scale() + b.scale();

        self.rescale_floor(&self.to_decimal(product, product_scale), precision)
    }

    /// `a / b` at `precision`, truncated toward zero.
    fn div_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;

        self.to_decimal(numerator / scaled_b.into_raw_units(), precision)
    }

    /// `value * numerator / denominator` on raw units, truncated, at the scale of `value`.
    fn mul_div_floor(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        numerator: &BigUint,
        denominator: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = value.into_raw_units() * numerator / denominator;
        self.to_decimal(raw, value.scale())
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn bps_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_bps(BigUint::zero())
    }

    fn to_decimal_bps(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, BPS_PRECISION)
    }

    fn wad(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    /// Converts a whole-unit amount (e.g. `50_000` USD) to raw units at `precision`.
    fn whole_units(
        &self,
        amount: u64,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = BigUint::from(amount) * BigUint::from(10u64).pow(precision as u32);
        self.to_decimal(raw, precision)
    }

    fn rescale_floor(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();

        match new_precision.cmp(&old_precision) {
            Ordering::Equal => value.clone(),
            Ordering::Less => {
                let factor = BigUint::from(10u64).pow((old_precision - new_precision) as u32);
                ManagedDecimal::from_raw_units(value.into_raw_units() / &factor, new_precision)
            },
            Ordering::Greater => value.rescale(new_precision),
        }
    }

    /// Saturating subtraction at the scale of `a`.
    fn sub_or_zero(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let b = b.rescale(a.scale());
        if a.into_raw_units() > b.into_raw_units() {
            self.to_decimal(a.into_raw_units() - b.into_raw_units(), a.scale())
        } else {
            self.to_decimal(BigUint::zero(), a.scale())
        }
    }

    fn get_min(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a < b {
            a
        } else {
            b
        }
    }

    fn get_max(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a > b {
            a
        } else {
            b
        }
    }
}
