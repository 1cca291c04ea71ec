//! Property tests for rank progression.

use proptest::prelude::*;

use crate::domain::progression::{advance, is_valid_level, MAX_LEVEL, MIN_LEVEL};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_result_stays_in_range(level in test_gens::level(), change in 0u32..=18) {
        let adv = advance(level, change);
        prop_assert!(is_valid_level(adv.new_level));
    }

    #[test]
    fn prop_graduation_iff_past_ace(level in test_gens::level(), change in 0u32..=18) {
        let adv = advance(level, change);
        let past_ace = u32::from(level) + change > u32::from(MAX_LEVEL);
        prop_assert_eq!(adv.graduated, past_ace);
        if adv.graduated {
            prop_assert_eq!(adv.new_level, MIN_LEVEL);
        } else {
            prop_assert_eq!(u32::from(adv.new_level), u32::from(level) + change);
        }
    }
}
