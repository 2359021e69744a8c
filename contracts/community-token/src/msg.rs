use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;
use shared::{Asset, MemberCategory, TokenSymbol};

use crate::state::TokenType;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of the community directory contract
    pub community_contract: String,
    /// Address of the deferred-job scheduler contract
    pub scheduler: String,
    /// Platform account allowed to act with the contract's own authority.
    /// Defaults to the instantiator.
    pub admin: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a new currency for an existing community. Only the
    /// community creator may call this.
    Create {
        issuer: String,
        max_supply: Asset,
        min_balance: Asset,
        token_type: TokenType,
    },
    /// Replace a currency's max supply and minimum balance. Issuer only.
    Update {
        max_supply: Asset,
        min_balance: Asset,
    },
    /// Mint new tokens to the issuer, forwarding them to `to` when it is a
    /// different account. Reachable only through the platform's privileged
    /// path.
    Issue {
        to: String,
        quantity: Asset,
        memo: String,
    },
    /// Move tokens between two community members.
    Transfer {
        from: String,
        to: String,
        quantity: Asset,
        memo: String,
    },
    /// Zero out the balances of every member of the given category and
    /// shrink supply accordingly. Expiry currencies only; invoked by the
    /// scheduler when an expiration period elapses.
    Retire {
        currency: TokenSymbol,
        category: MemberCategory,
        memo: String,
    },
    /// Create a zero balance row for a community member. Idempotent.
    InitAccount {
        currency: TokenSymbol,
        account: String,
        inviter: String,
    },
    /// Upsert the expiration policy of an expiry currency, issue the
    /// renovation amount to every natural member and (re)schedule both
    /// retirement jobs.
    SetExpiry {
        currency: TokenSymbol,
        natural_expiration_period: u64,
        juridical_expiration_period: u64,
        renovation_amount: Asset,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Get stats for a single currency by symbol code
    #[returns(CurrencyResponse)]
    GetCurrency { symbol: String },

    /// Page through all registered currencies
    #[returns(CurrenciesResponse)]
    GetCurrencies {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Get an account's balance for a currency. Accounts without a balance
    /// row report zero.
    #[returns(BalanceResponse)]
    GetBalance { owner: String, symbol: String },

    /// Get the expiration policy of an expiry currency
    #[returns(ExpiryOptionsResponse)]
    GetExpiryOptions { symbol: String },
}

// Response types

#[cw_serde]
pub struct ConfigResponse {
    pub community_contract: Addr,
    pub scheduler: Addr,
    pub admin: Addr,
}

#[cw_serde]
pub struct CurrencyResponse {
    pub symbol: TokenSymbol,
    pub supply: Asset,
    pub max_supply: Asset,
    pub min_balance: Asset,
    pub issuer: Addr,
    pub token_type: TokenType,
}

#[cw_serde]
pub struct CurrenciesResponse {
    pub currencies: Vec<CurrencyResponse>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Asset,
    /// Unset when no balance row exists yet
    pub last_activity: Option<u64>,
}

#[cw_serde]
pub struct ExpiryOptionsResponse {
    pub currency: TokenSymbol,
    pub natural_expiration_period: u64,
    pub juridical_expiration_period: u64,
    pub renovation_amount: Asset,
}
