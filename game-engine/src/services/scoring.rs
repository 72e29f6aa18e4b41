//! Pure numeric scoring rules shared by every game type.

/// Time bonus multiplier applied to XP.
///
/// Games without a time limit always earn the neutral 1.0 multiplier. For
/// timed games the multiplier steps down as the spent/limit ratio grows,
/// with a penalty once the limit is exceeded.
pub fn time_bonus(time_limit: Option<u32>, time_spent: u32) -> f64 {
    let Some(limit) = time_limit else {
        return 1.0;
    };
    if limit == 0 {
        return 1.0;
    }

    let ratio = f64::from(time_spent) / f64::from(limit);
    if ratio <= 0.5 {
        1.2
    } else if ratio <= 0.8 {
        1.0
    } else if ratio <= 1.0 {
        0.9
    } else {
        0.7
    }
}

/// XP for one play: base reward scaled by unrounded accuracy and time bonus,
/// rounded to the nearest whole point.
pub fn xp_earned(base_xp: u32, accuracy: f64, bonus: f64) -> u32 {
    (f64::from(base_xp) * (accuracy / 100.0) * bonus).round() as u32
}

/// Percentage with a guarded denominator: 0 when `total` is 0.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        (part / total) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_bonus_boundaries() {
        assert_eq!(time_bonus(Some(100), 50), 1.2);
        assert_eq!(time_bonus(Some(100), 80), 1.0);
        assert_eq!(time_bonus(Some(100), 100), 0.9);
        assert_eq!(time_bonus(Some(100), 150), 0.7);
        assert_eq!(time_bonus(None, 999), 1.0);
    }

    #[test]
    fn zero_time_limit_is_neutral() {
        assert_eq!(time_bonus(Some(0), 10), 1.0);
    }

    #[test]
    fn xp_rounds_to_nearest() {
        // 10 * 0.75 * 1.0 = 7.5 -> 8
        assert_eq!(xp_earned(10, 75.0, 1.0), 8);
        // 15 * (100/3)/100 * 1.2 = 6.0 -> 6
        assert_eq!(xp_earned(15, 100.0 / 3.0, 1.2), 6);
        assert_eq!(xp_earned(10, 0.0, 1.2), 0);
    }

    #[test]
    fn percentage_guards_zero_total() {
        assert_eq!(percentage(3.0, 0.0), 0.0);
        assert_eq!(percentage(3.0, 4.0), 75.0);
    }
}
