//! Lucas engine
//!
//! Evaluated by plain double recursion. The call count grows like φⁿ, which
//! is the latency this service exists to expose, so no memoization or
//! closed form is used here.

/// Compute the `n`-th Lucas number.
///
/// `L(0) = 2`, `L(1) = 1`, `L(n) = L(n-1) + L(n-2)`.
///
/// `u128` holds every value up to `L(184)`; evaluating anything near that
/// bound this way would never finish, so the addition cannot overflow in
/// practice.
#[must_use]
pub fn compute(n: u64) -> u128 {
    match n {
        0 => 2,
        1 => 1,
        _ => compute(n - 1) + compute(n - 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(compute(0), 2);
        assert_eq!(compute(1), 1);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(compute(2), 3);
        assert_eq!(compute(3), 4);
        assert_eq!(compute(4), 7);
        assert_eq!(compute(10), 123);
        assert_eq!(compute(20), 15_127);
    }

    #[test]
    fn test_exceeds_32_bit_range() {
        // L(47) = 6_643_838_879 does not fit in u32
        assert_eq!(compute(47), 6_643_838_879);
    }

    #[test]
    fn test_deterministic() {
        let first = compute(18);
        for _ in 0..5 {
            assert_eq!(compute(18), first);
        }
    }

    proptest! {
        #[test]
        fn prop_recurrence_holds(n in 2u64..24) {
            prop_assert_eq!(compute(n), compute(n - 1) + compute(n - 2));
        }

        #[test]
        fn prop_strictly_increasing_after_one(n in 1u64..24) {
            prop_assert!(compute(n + 1) > compute(n));
        }
    }
}
