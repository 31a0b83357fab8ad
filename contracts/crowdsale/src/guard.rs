use crate::errors::Error;
use crate::types::SaleConfig;

pub fn within_window(config: &SaleConfig, now: u64) -> bool {
    now >= config.start_time && now <= config.end_time
}

pub fn check_window(config: &SaleConfig, now: u64) -> Result<(), Error> {
    if !within_window(config, now) {
        return Err(Error::OutsideWindow);
    }
    Ok(())
}

/// Rejects a contribution that would push the raise past the cap. Nothing is
/// ever accepted partially.
pub fn check_cap(cap: i128, total_raised_before: i128, amount: i128) -> Result<(), Error> {
    let after = total_raised_before
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if after > cap {
        return Err(Error::CapExceeded);
    }
    Ok(())
}

pub fn check_acceptable(
    config: &SaleConfig,
    now: u64,
    total_raised_before: i128,
    amount: i128,
) -> Result<(), Error> {
    check_window(config, now)?;
    check_cap(config.cap, total_raised_before, amount)
}

pub fn cap_reached(total_raised: i128, cap: i128) -> bool {
    total_raised >= cap
}

/// Only meaningful once the sale has ended.
pub fn goal_reached(total_raised: i128, goal: i128) -> bool {
    total_raised >= goal
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, vec, Address, Env};

    fn config(env: &Env) -> SaleConfig {
        SaleConfig {
            start_time: 100,
            end_time: 200,
            rate: 10,
            cap: 1_000,
            goal: 600,
            wave_caps: vec![env, 1_000],
            wave_bonuses: vec![env, 10u32],
            wallet: Address::generate(env),
            team: Address::generate(env),
            ecosystem: Address::generate(env),
            bounty: Address::generate(env),
        }
    }

    #[test]
    fn test_window_is_inclusive() {
        let env = Env::default();
        let config = config(&env);

        assert_eq!(check_window(&config, 99), Err(Error::OutsideWindow));
        assert_eq!(check_window(&config, 100), Ok(()));
        assert_eq!(check_window(&config, 200), Ok(()));
        assert_eq!(check_window(&config, 201), Err(Error::OutsideWindow));
    }

    #[test]
    fn test_cap_rejects_without_truncation() {
        assert_eq!(check_cap(1_000, 0, 1_000), Ok(()));
        assert_eq!(check_cap(1_000, 999, 1), Ok(()));
        assert_eq!(check_cap(1_000, 999, 2), Err(Error::CapExceeded));
        assert_eq!(check_cap(1_000, 1_000, 1), Err(Error::CapExceeded));
        assert_eq!(check_cap(1_000, i128::MAX, 1), Err(Error::ArithmeticOverflow));
    }

    #[test]
    fn test_window_is_checked_before_cap() {
        let env = Env::default();
        let config = config(&env);

        assert_eq!(
            check_acceptable(&config, 50, 0, 5_000),
            Err(Error::OutsideWindow)
        );
        assert_eq!(
            check_acceptable(&config, 150, 0, 5_000),
            Err(Error::CapExceeded)
        );
        assert_eq!(check_acceptable(&config, 150, 0, 500), Ok(()));
    }

    #[test]
    fn test_goal_and_cap_reached() {
        assert!(!goal_reached(599, 600));
        assert!(goal_reached(600, 600));
        assert!(!cap_reached(999, 1_000));
        assert!(cap_reached(1_000, 1_000));
    }
}
