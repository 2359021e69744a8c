// Shared types and collaborator interfaces for the community token ledger on CosmWasm

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Int128, StdError, StdResult};

/// Longest allowed symbol code.
pub const MAX_SYMBOL_LEN: usize = 7;

/// Largest supported decimal precision.
pub const MAX_PRECISION: u8 = 18;

/// Identifier of a community currency: a short uppercase code plus its
/// fixed decimal precision. Two symbols match only when code AND precision
/// are equal.
#[cw_serde]
pub struct TokenSymbol {
    pub code: String,
    pub precision: u8,
}

impl TokenSymbol {
    pub fn new(code: impl Into<String>, precision: u8) -> Self {
        TokenSymbol {
            code: code.into(),
            precision,
        }
    }

    /// Code must be 1-7 uppercase ASCII letters, precision at most 18.
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty()
            && self.code.len() <= MAX_SYMBOL_LEN
            && self.code.bytes().all(|b| b.is_ascii_uppercase())
            && self.precision <= MAX_PRECISION
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// A signed quantity of one currency. Balances of mutual-credit currencies
/// may legitimately go negative, so the amount is an `Int128` rather than a
/// `Uint128`.
#[cw_serde]
pub struct Asset {
    pub amount: Int128,
    pub symbol: TokenSymbol,
}

impl Asset {
    pub fn new(amount: i128, symbol: TokenSymbol) -> Self {
        Asset {
            amount: Int128::new(amount),
            symbol,
        }
    }

    pub fn zero(symbol: TokenSymbol) -> Self {
        Asset {
            amount: Int128::zero(),
            symbol,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.symbol.is_valid()
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Int128::zero()
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn checked_add(&self, other: &Asset) -> StdResult<Asset> {
        self.ensure_same_symbol(other)?;
        Ok(Asset {
            amount: self
                .amount
                .checked_add(other.amount)
                .map_err(StdError::overflow)?,
            symbol: self.symbol.clone(),
        })
    }

    pub fn checked_sub(&self, other: &Asset) -> StdResult<Asset> {
        self.ensure_same_symbol(other)?;
        Ok(Asset {
            amount: self
                .amount
                .checked_sub(other.amount)
                .map_err(StdError::overflow)?,
            symbol: self.symbol.clone(),
        })
    }

    pub fn checked_neg(&self) -> StdResult<Asset> {
        Ok(Asset {
            amount: Int128::zero()
                .checked_sub(self.amount)
                .map_err(StdError::overflow)?,
            symbol: self.symbol.clone(),
        })
    }

    fn ensure_same_symbol(&self, other: &Asset) -> StdResult<()> {
        if self.symbol != other.symbol {
            return Err(StdError::generic_err(format!(
                "asset symbol mismatch: {} vs {}",
                self.symbol, other.symbol
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Asset {
    /// Renders the raw amount at the symbol's precision, e.g. `-20.00 SYM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.amount.i128();
        let sign = if raw < 0 { "-" } else { "" };
        let abs = raw.unsigned_abs();
        if self.symbol.precision == 0 {
            return write!(f, "{}{} {}", sign, abs, self.symbol.code);
        }
        let base = 10u128.pow(self.symbol.precision as u32);
        write!(
            f,
            "{}{}.{:0width$} {}",
            sign,
            abs / base,
            abs % base,
            self.symbol.code,
            width = self.symbol.precision as usize
        )
    }
}

/// Member categories recognized by the community directory.
#[cw_serde]
pub enum MemberCategory {
    Natural,
    Juridical,
}

impl fmt::Display for MemberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberCategory::Natural => write!(f, "natural"),
            MemberCategory::Juridical => write!(f, "juridical"),
        }
    }
}

// Community directory interface. The directory is a separate deployment;
// the token contract only consumes these messages.

#[cw_serde]
pub enum CommunityQueryMsg {
    /// Look up the community owning a currency symbol.
    Community { symbol: TokenSymbol },
    /// Whether an account is linked into the community owning the symbol.
    IsMember {
        symbol: TokenSymbol,
        account: String,
    },
    /// Page through community members, optionally filtered by category.
    /// Iteration order is stable for a fixed snapshot.
    Members {
        symbol: TokenSymbol,
        category: Option<MemberCategory>,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct CommunityResponse {
    pub symbol: TokenSymbol,
    pub creator: Addr,
    pub name: String,
}

#[cw_serde]
pub struct IsMemberResponse {
    pub is_member: bool,
}

#[cw_serde]
pub struct MemberInfo {
    pub account: Addr,
    pub category: MemberCategory,
}

#[cw_serde]
pub struct MembersResponse {
    pub members: Vec<MemberInfo>,
}

#[cw_serde]
pub enum CommunityExecuteMsg {
    /// Request that `new_user` be linked into the community owning `symbol`.
    Netlink {
        symbol: TokenSymbol,
        new_user: String,
        inviter: String,
    },
}

// Deferred-job scheduler interface.

#[cw_serde]
pub enum SchedulerExecuteMsg {
    /// Execute `msg` on `target` once `delay_seconds` have elapsed. Jobs are
    /// keyed by `job_id`; scheduling with an existing id while
    /// `replace_existing` is set cancels and replaces the pending job.
    Schedule {
        job_id: String,
        target: String,
        msg: Binary,
        delay_seconds: u64,
        replace_existing: bool,
    },
}
