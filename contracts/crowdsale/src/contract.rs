use crate::distribution;
use crate::errors::Error;
use crate::events::{self, FinalizedEvent, SaleInitializedEvent, TokenPurchaseEvent};
use crate::guard;
use crate::ledger;
use crate::rate;
use crate::storage::*;
use crate::types::*;
use crate::waves::WaveTable;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Staged crowdsale with wave bonuses, hard cap and beneficiary allocations"
);

fn validate_config(config: &SaleConfig) -> Result<WaveTable, Error> {
    if config.start_time >= config.end_time {
        return Err(Error::InvalidWindow);
    }
    if config.rate <= 0 {
        return Err(Error::InvalidRate);
    }
    if config.cap <= 0 {
        return Err(Error::InvalidCap);
    }
    if config.goal < 0 || config.goal > config.cap {
        return Err(Error::InvalidGoal);
    }

    let waves = WaveTable::new(config.wave_caps.clone(), config.wave_bonuses.clone())?;
    if waves.final_cap()? != config.cap {
        return Err(Error::FinalWaveCapMismatch);
    }
    Ok(waves)
}

fn has_ended(config: &SaleConfig, state: &SaleState, now: u64) -> bool {
    now > config.end_time || guard::cap_reached(state.total_raised, config.cap)
}

/// Phase at `now`. Never cached: opening and closing follow the clock.
fn current_phase(config: &SaleConfig, state: &SaleState, now: u64) -> SalePhase {
    if state.finalized {
        SalePhase::Finalized
    } else if now < config.start_time {
        SalePhase::NotStarted
    } else if has_ended(config, state, now) {
        SalePhase::Closed
    } else {
        SalePhase::Open
    }
}

fn require_owner(env: &Env) -> Result<(), Error> {
    get_owner(env)?.require_auth();
    Ok(())
}

#[contract]
pub struct CrowdsaleContract;

#[contractimpl]
impl CrowdsaleContract {
    /// Initialize the sale. `token` must already have this contract as its
    /// admin before the first purchase.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        payment_token: Address,
        config: SaleConfig,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        let waves = validate_config(&config)?;

        set_config(&env, &config);
        set_owner(&env, &owner);
        set_token(&env, &token);
        set_payment_token(&env, &payment_token);
        set_waves(&env, &waves);
        set_state(&env, &SaleState::default());
        bump_instance(&env);

        events::emit_initialized(
            &env,
            SaleInitializedEvent {
                owner,
                token,
                wallet: config.wallet,
                start_time: config.start_time,
                end_time: config.end_time,
                cap: config.cap,
                goal: config.goal,
            },
        );
        Ok(())
    }

    /// Buy tokens for `beneficiary`, paid by `purchaser`. Returns the number
    /// of tokens issued.
    pub fn buy_tokens(
        env: Env,
        purchaser: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        purchaser.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        let now = get_ledger_timestamp(&env);

        if state.finalized {
            return Err(Error::OutsideWindow);
        }
        guard::check_acceptable(&config, now, state.total_raised, amount)?;

        let waves = get_waves(&env)?;
        let issuance = rate::compute_issuance(
            &waves,
            config.rate,
            amount,
            state.total_raised,
            state.current_wave,
        )?;

        // Everything is computed before the first external call
        let previous_wave = state.current_wave;
        state.total_raised = state
            .total_raised
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        state.tokens_issued = state
            .tokens_issued
            .checked_add(issuance.tokens)
            .ok_or(Error::ArithmeticOverflow)?;
        state.current_wave = issuance.new_wave;

        ledger::forward_funds(
            &env,
            &get_payment_token(&env)?,
            &purchaser,
            &config.wallet,
            amount,
        )?;
        ledger::mint(&env, &get_token(&env)?, &beneficiary, issuance.tokens)?;

        set_state(&env, &state);
        bump_instance(&env);

        if state.current_wave != previous_wave {
            events::emit_wave_advanced(&env, previous_wave, state.current_wave, state.total_raised);
        }
        events::emit_purchase(
            &env,
            TokenPurchaseEvent {
                purchaser,
                beneficiary,
                value: amount,
                tokens: issuance.tokens,
                wave: previous_wave,
                timestamp: now,
            },
        );

        Ok(issuance.tokens)
    }

    /// Operator mint for contributions settled elsewhere. Skips rate, cap and
    /// waves but still counts toward the beneficiary allocations.
    pub fn mint_tokens(env: Env, beneficiary: Address, amount: i128) -> Result<(), Error> {
        require_owner(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = get_config(&env)?;
        let mut state = get_state(&env)?;
        let now = get_ledger_timestamp(&env);

        if current_phase(&config, &state, now) != SalePhase::Open {
            return Err(Error::OutsideWindow);
        }

        state.tokens_issued = state
            .tokens_issued
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        ledger::mint(&env, &get_token(&env)?, &beneficiary, amount)?;

        set_state(&env, &state);
        bump_instance(&env);

        events::emit_operator_mint(&env, beneficiary, amount, now);
        Ok(())
    }

    /// Close the sale and mint the ecosystem, team and bounty allocations.
    /// Succeeds once; every later call fails with `AlreadyFinalized`.
    pub fn finalize(env: Env) -> Result<(), Error> {
        require_owner(&env)?;

        let mut state = get_state(&env)?;
        if state.finalized {
            return Err(Error::AlreadyFinalized);
        }

        let config = get_config(&env)?;
        let now = get_ledger_timestamp(&env);
        if !has_ended(&config, &state, now) {
            return Err(Error::NotYetEnded);
        }

        let allocations = distribution::plan(&config, state.tokens_issued)?;
        distribution::distribute(&env, &get_token(&env)?, &allocations)?;

        state.finalized = true;
        set_state(&env, &state);
        bump_instance(&env);

        events::emit_finalized(
            &env,
            FinalizedEvent {
                total_raised: state.total_raised,
                tokens_issued: state.tokens_issued,
                goal_reached: guard::goal_reached(state.total_raised, config.goal),
                timestamp: now,
            },
        );
        Ok(())
    }

    // View functions
    pub fn start_time(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.start_time)
    }

    pub fn end_time(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.end_time)
    }

    pub fn rate(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.rate)
    }

    pub fn wallet(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.wallet)
    }

    pub fn cap(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.cap)
    }

    pub fn goal(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.goal)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        get_token(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        get_payment_token(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn get_state(env: Env) -> Result<SaleState, Error> {
        get_state(&env)
    }

    pub fn get_current_stage(env: Env) -> Result<u32, Error> {
        Ok(get_state(&env)?.current_wave)
    }

    pub fn should_increment_wave(
        _env: Env,
        wave_index: u32,
        total_raised_after: i128,
        wave_cap: i128,
    ) -> bool {
        rate::should_increment_wave(wave_index, total_raised_after, wave_cap)
    }

    pub fn wave_count(env: Env) -> Result<u32, Error> {
        Ok(get_waves(&env)?.wave_count())
    }

    pub fn wave_cap(env: Env, index: u32) -> Result<i128, Error> {
        get_waves(&env)?.cap_for_wave(index)
    }

    pub fn wave_bonus(env: Env, index: u32) -> Result<u32, Error> {
        get_waves(&env)?.bonus_for_wave(index)
    }

    pub fn total_raised(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.total_raised)
    }

    pub fn tokens_issued(env: Env) -> Result<i128, Error> {
        Ok(get_state(&env)?.tokens_issued)
    }

    pub fn goal_reached(env: Env) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Ok(guard::goal_reached(get_state(&env)?.total_raised, config.goal))
    }

    pub fn has_ended(env: Env) -> Result<bool, Error> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        Ok(has_ended(&config, &state, get_ledger_timestamp(&env)))
    }

    pub fn is_finalized(env: Env) -> Result<bool, Error> {
        Ok(get_state(&env)?.finalized)
    }

    pub fn phase(env: Env) -> Result<SalePhase, Error> {
        let config = get_config(&env)?;
        let state = get_state(&env)?;
        Ok(current_phase(&config, &state, get_ledger_timestamp(&env)))
    }
}
