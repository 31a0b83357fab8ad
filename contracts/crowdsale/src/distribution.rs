use soroban_sdk::{Address, Env};

use crate::constants::{
    BOUNTY_SHARE_PCT, ECOSYSTEM_SHARE_PCT, PERCENT_DENOMINATOR, TEAM_SHARE_PCT,
};
use crate::errors::Error;
use crate::events;
use crate::ledger;
use crate::types::{Allocation, AllocationKind, SaleConfig};

fn share_of(tokens_issued: i128, pct: i128) -> Result<i128, Error> {
    tokens_issued
        .checked_mul(pct)
        .map(|scaled| scaled / PERCENT_DENOMINATOR)
        .ok_or(Error::ArithmeticOverflow)
}

/// Beneficiary allocations, each a fixed share of the tokens issued to
/// contributors (not of the amount raised).
pub fn plan(config: &SaleConfig, tokens_issued: i128) -> Result<[Allocation; 3], Error> {
    Ok([
        Allocation {
            kind: AllocationKind::Ecosystem,
            beneficiary: config.ecosystem.clone(),
            amount: share_of(tokens_issued, ECOSYSTEM_SHARE_PCT)?,
        },
        Allocation {
            kind: AllocationKind::Team,
            beneficiary: config.team.clone(),
            amount: share_of(tokens_issued, TEAM_SHARE_PCT)?,
        },
        Allocation {
            kind: AllocationKind::Bounty,
            beneficiary: config.bounty.clone(),
            amount: share_of(tokens_issued, BOUNTY_SHARE_PCT)?,
        },
    ])
}

/// Mints a fully computed plan. Must run inside the finalize call: an error
/// fails that call, and the host discards the mints already made with it.
pub fn distribute(env: &Env, token: &Address, allocations: &[Allocation]) -> Result<(), Error> {
    for allocation in allocations.iter() {
        if allocation.amount == 0 {
            continue;
        }
        ledger::mint(env, token, &allocation.beneficiary, allocation.amount)?;
        events::emit_allocation(env, allocation);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, vec, Env};

    fn config(env: &Env) -> SaleConfig {
        SaleConfig {
            start_time: 1,
            end_time: 2,
            rate: 1,
            cap: 10,
            goal: 5,
            wave_caps: vec![env, 10],
            wave_bonuses: vec![env, 1u32],
            wallet: Address::generate(env),
            team: Address::generate(env),
            ecosystem: Address::generate(env),
            bounty: Address::generate(env),
        }
    }

    #[test]
    fn test_plan_uses_fixed_shares_of_tokens_issued() {
        let env = Env::default();
        let config = config(&env);

        let [ecosystem, team, bounty] = plan(&config, 300_000).unwrap();
        assert_eq!(ecosystem.kind, AllocationKind::Ecosystem);
        assert_eq!(ecosystem.beneficiary, config.ecosystem);
        assert_eq!(ecosystem.amount, 60_000);
        assert_eq!(team.beneficiary, config.team);
        assert_eq!(team.amount, 60_000);
        assert_eq!(bounty.beneficiary, config.bounty);
        assert_eq!(bounty.amount, 15_000);
    }

    #[test]
    fn test_plan_rounds_down() {
        let env = Env::default();
        let [ecosystem, team, bounty] = plan(&config(&env), 19).unwrap();

        assert_eq!(ecosystem.amount, 3);
        assert_eq!(team.amount, 3);
        assert_eq!(bounty.amount, 0);
    }

    #[test]
    fn test_plan_overflow() {
        let env = Env::default();
        assert_eq!(
            plan(&config(&env), i128::MAX),
            Err(Error::ArithmeticOverflow)
        );
    }
}
