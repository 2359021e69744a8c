use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use shared::{Asset, TokenSymbol};

#[cw_serde]
pub enum TokenType {
    /// Mutual credit clearing: balances may go negative down to the
    /// configured credit line (`min_balance <= 0`).
    Mcc,
    /// Balances are periodically renewed and mass-retired on a schedule.
    Expiry,
}

#[cw_serde]
pub struct Config {
    /// Community directory answering membership lookups
    pub community_contract: Addr,
    /// Deferred-job scheduler executing delayed retirements
    pub scheduler: Addr,
    /// Platform account allowed to act with the contract's own authority
    pub admin: Addr,
}

#[cw_serde]
pub struct CurrencyStats {
    /// Amount currently in circulation
    pub supply: Asset,
    /// Hard cap on circulation
    pub max_supply: Asset,
    /// Lowest permitted account balance (zero or negative)
    pub min_balance: Asset,
    /// Account credited on issuance
    pub issuer: Addr,
    pub token_type: TokenType,
}

#[cw_serde]
pub struct Account {
    pub balance: Asset,
    /// Timestamp of the last balance mutation
    pub last_activity: u64,
}

#[cw_serde]
pub struct ExpiryOptions {
    pub currency: TokenSymbol,
    /// Seconds until natural members' balances are retired
    pub natural_expiration_period: u64,
    /// Seconds until juridical members' balances are retired
    pub juridical_expiration_period: u64,
    /// Amount issued to every natural member on configuration
    pub renovation_amount: Asset,
}

/// Contract configuration
pub const CONFIG: Item<Config> = Item::new("config");

/// Per-currency stats indexed by symbol code
pub const STATS: Map<&str, CurrencyStats> = Map::new("stats");

/// Balances indexed by (owner, symbol code). Rows are never deleted;
/// retirement resets them to zero.
pub const ACCOUNTS: Map<(&Addr, &str), Account> = Map::new("accounts");

/// Expiration policy per expiry-type currency
pub const EXPIRY_OPTIONS: Map<&str, ExpiryOptions> = Map::new("expiry_options");
