#![allow(dead_code)]

use crowdsale::{CrowdsaleContract, CrowdsaleContractClient, SaleConfig};
use sale_token::{SaleToken, SaleTokenClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, vec, Address, Env, String};

pub const RATE: i128 = 100_000; // tokens per base unit
pub const ETHER: i128 = 1_000_000_000_000_000_000;
pub const CAP: i128 = 5 * ETHER;
pub const GOAL: i128 = 3 * ETHER;
pub const WAVE_CAPS: [i128; 3] = [2 * ETHER, 7 * ETHER / 2, CAP];
pub const WAVE_BONUSES: [u32; 3] = [200, 100, 50];

pub const DAY: u64 = 86_400;
pub const WEEK: u64 = 7 * DAY;
pub const START_OFFSET_DAYS: u64 = 1;
pub const DURATION_WEEKS: u64 = 4;
pub const GENESIS: u64 = 1_700_000_000;

pub const INVESTOR_FUNDS: i128 = 6 * ETHER;

pub struct SaleFixture {
    pub env: Env,
    pub sale: CrowdsaleContractClient<'static>,
    pub token: SaleTokenClient<'static>,
    pub payment: token::Client<'static>,
    pub owner: Address,
    pub wallet: Address,
    pub team: Address,
    pub ecosystem: Address,
    pub bounty: Address,
    pub investor: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub after_end_time: u64,
}

impl SaleFixture {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|l| l.timestamp = GENESIS);

        let start_time = GENESIS + START_OFFSET_DAYS * DAY;
        let end_time = start_time + DURATION_WEEKS * WEEK;

        let owner = Address::generate(&env);
        let wallet = Address::generate(&env);
        let team = Address::generate(&env);
        let ecosystem = Address::generate(&env);
        let bounty = Address::generate(&env);
        let investor = Address::generate(&env);

        let sale_id = env.register_contract(None, CrowdsaleContract);
        let sale = CrowdsaleContractClient::new(&env, &sale_id);

        // deployed by its own admin, then minting rights move to the sale
        let token_admin = Address::generate(&env);
        let token_id = env.register_contract(None, SaleToken);
        let token = SaleTokenClient::new(&env, &token_id);
        token.initialize(
            &token_admin,
            &18u32,
            &String::from_str(&env, "Sale Token"),
            &String::from_str(&env, "SALE"),
        );
        token.set_admin(&sale_id);

        let payment_admin = Address::generate(&env);
        let payment_id = env
            .register_stellar_asset_contract_v2(payment_admin)
            .address();
        let payment = token::Client::new(&env, &payment_id);
        token::StellarAssetClient::new(&env, &payment_id).mint(&investor, &INVESTOR_FUNDS);

        let config = SaleConfig {
            start_time,
            end_time,
            rate: RATE,
            cap: CAP,
            goal: GOAL,
            wave_caps: vec![&env, WAVE_CAPS[0], WAVE_CAPS[1], WAVE_CAPS[2]],
            wave_bonuses: vec![&env, WAVE_BONUSES[0], WAVE_BONUSES[1], WAVE_BONUSES[2]],
            wallet: wallet.clone(),
            team: team.clone(),
            ecosystem: ecosystem.clone(),
            bounty: bounty.clone(),
        };
        sale.initialize(&owner, &token_id, &payment_id, &config);

        Self {
            env,
            sale,
            token,
            payment,
            owner,
            wallet,
            team,
            ecosystem,
            bounty,
            investor,
            start_time,
            end_time,
            after_end_time: end_time + 90,
        }
    }

    pub fn increase_time_to(&self, timestamp: u64) {
        self.env.ledger().with_mut(|l| l.timestamp = timestamp);
    }

    pub fn buy(&self, amount: i128) -> i128 {
        self.sale.buy_tokens(&self.investor, &self.investor, &amount)
    }
}

/// Tokens a contribution earns at a given wave bonus.
pub fn priced(amount: i128, bonus: u32) -> i128 {
    amount * RATE * (100 + bonus as i128) / 100
}
