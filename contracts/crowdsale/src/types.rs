use soroban_sdk::{contracttype, Address, Env, Vec};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub start_time: u64,
    pub end_time: u64,
    pub rate: i128, // Tokens issued per base-currency unit, before bonus
    pub cap: i128,  // Maximum total raise
    pub goal: i128, // Minimum raise for a successful sale
    pub wave_caps: Vec<i128>,
    pub wave_bonuses: Vec<u32>,
    pub wallet: Address, // Receives contributions as they arrive
    pub team: Address,
    pub ecosystem: Address,
    pub bounty: Address,
}

/// Running totals; loaded and stored as one unit.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct SaleState {
    pub total_raised: i128,
    pub current_wave: u32,
    pub finalized: bool,
    pub tokens_issued: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SalePhase {
    NotStarted = 0,
    Open = 1,
    Closed = 2,
    Finalized = 3,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Issuance {
    pub tokens: i128,
    pub new_wave: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum AllocationKind {
    Ecosystem = 0,
    Team = 1,
    Bounty = 2,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Allocation {
    pub kind: AllocationKind,
    pub beneficiary: Address,
    pub amount: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    Token,
    PaymentToken,
    Waves,
    State,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
