use serde::{Deserialize, Serialize};

/// Price-derived discount tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Discount {
    #[default]
    None,
    Small,
    Medium,
    Big,
}

impl Discount {
    /// Pick the tier for a price. Thresholds are strict: exactly 50 earns nothing.
    pub fn for_price(price: f64) -> Self {
        if price > 200.0 {
            Discount::Big
        } else if price > 100.0 {
            Discount::Medium
        } else if price > 50.0 {
            Discount::Small
        } else {
            Discount::None
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Discount::None => 1.0,
            Discount::Small => 0.9,
            Discount::Medium => 0.8,
            Discount::Big => 0.7,
        }
    }

    pub fn apply(self, price: f64) -> f64 {
        price * self.multiplier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_at_reference_prices() {
        assert_eq!(Discount::for_price(50.0), Discount::None);
        assert_eq!(Discount::for_price(60.0), Discount::Small);
        assert_eq!(Discount::for_price(120.0), Discount::Medium);
        assert_eq!(Discount::for_price(250.0), Discount::Big);
    }

    #[test]
    fn boundaries_are_exclusive() {
        assert_eq!(Discount::for_price(100.0), Discount::Small);
        assert_eq!(Discount::for_price(200.0), Discount::Medium);
        assert_eq!(Discount::for_price(200.01), Discount::Big);
    }

    #[test]
    fn apply_scales_price() {
        assert_eq!(Discount::None.apply(40.0), 40.0);
        assert!((Discount::Big.apply(250.0) - 175.0).abs() < 1e-9);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: a higher price never gets a smaller discount.
            #[test]
            fn multiplier_is_monotonic_in_price(a in 0.0f64..1_000.0, b in 0.0f64..1_000.0) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(
                    Discount::for_price(hi).multiplier() <= Discount::for_price(lo).multiplier()
                );
            }

            /// Property: a discounted price never exceeds the list price.
            #[test]
            fn discounted_price_never_exceeds_price(price in 0.0f64..10_000.0) {
                let discounted = Discount::for_price(price).apply(price);
                prop_assert!(discounted <= price);
                prop_assert!(discounted >= price * 0.7 - 1e-9);
            }
        }
    }
}
