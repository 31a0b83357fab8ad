use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::types::{Allocation, AllocationKind};

// ==================== Event Payload Structs ====================
// Published under ("SALE", <kind>) so indexers can follow a single sale.

const SALE: Symbol = symbol_short!("SALE");

#[derive(Clone)]
#[contracttype]
pub struct SaleInitializedEvent {
    pub owner: Address,
    pub token: Address,
    pub wallet: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub cap: i128,
    pub goal: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenPurchaseEvent {
    pub purchaser: Address,
    pub beneficiary: Address,
    pub value: i128,
    pub tokens: i128,
    pub wave: u32,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct WaveAdvancedEvent {
    pub from: u32,
    pub to: u32,
    pub total_raised: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct OperatorMintEvent {
    pub beneficiary: Address,
    pub tokens: i128,
    pub timestamp: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct AllocationEvent {
    pub kind: AllocationKind,
    pub beneficiary: Address,
    pub tokens: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct FinalizedEvent {
    pub total_raised: i128,
    pub tokens_issued: i128,
    pub goal_reached: bool,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

pub fn emit_initialized(env: &Env, event: SaleInitializedEvent) {
    env.events().publish((SALE, symbol_short!("init")), event);
}

pub fn emit_purchase(env: &Env, event: TokenPurchaseEvent) {
    env.events().publish((SALE, symbol_short!("purchase")), event);
}

pub fn emit_wave_advanced(env: &Env, from: u32, to: u32, total_raised: i128) {
    env.events().publish(
        (SALE, symbol_short!("wave")),
        WaveAdvancedEvent {
            from,
            to,
            total_raised,
        },
    );
}

pub fn emit_operator_mint(env: &Env, beneficiary: Address, tokens: i128, timestamp: u64) {
    env.events().publish(
        (SALE, symbol_short!("opmint")),
        OperatorMintEvent {
            beneficiary,
            tokens,
            timestamp,
        },
    );
}

pub fn emit_allocation(env: &Env, allocation: &Allocation) {
    env.events().publish(
        (SALE, symbol_short!("alloc")),
        AllocationEvent {
            kind: allocation.kind,
            beneficiary: allocation.beneficiary.clone(),
            tokens: allocation.amount,
        },
    );
}

pub fn emit_finalized(env: &Env, event: FinalizedEvent) {
    env.events().publish((SALE, symbol_short!("final")), event);
}
