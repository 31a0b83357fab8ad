#![no_std]

#[cfg(test)]
extern crate std;

mod constants;
mod contract;
mod distribution;
mod errors;
mod events;
mod guard;
mod ledger;
mod rate;
mod storage;
mod types;
mod waves;


pub use contract::{CrowdsaleContract, CrowdsaleContractClient};
pub use errors::Error;
pub use events::{
    AllocationEvent, FinalizedEvent, OperatorMintEvent, SaleInitializedEvent, TokenPurchaseEvent,
    WaveAdvancedEvent,
};
pub use ledger::{TokenLedger, TokenLedgerClient};
pub use types::{Allocation, AllocationKind, Issuance, SaleConfig, SalePhase, SaleState};
pub use waves::WaveTable;
