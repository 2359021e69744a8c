use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid symbol")]
    InvalidSymbol {},

    #[error("All assets must share the same symbol")]
    SymbolMismatch {},

    #[error("Community not found for this symbol")]
    CommunityNotFound {},

    #[error("Currency with given symbol does not exist")]
    CurrencyNotFound {},

    #[error("Currency with this symbol already exists")]
    DuplicateCurrency {},

    #[error("Amount must be positive")]
    NonPositiveAmount {},

    #[error("min_balance must be equal or less than 0")]
    InvalidMinBalance {},

    #[error("Quantity exceeds available supply")]
    SupplyExceeded {},

    #[error("Overdrawn community limit")]
    OverdrawnLimit {},

    #[error("Account {account} does not belong to the community")]
    NotAMember { account: String },

    #[error("Memo has more than 256 bytes")]
    MemoTooLong {},

    #[error("Cannot transfer to self")]
    SelfTransfer {},

    #[error("Only currencies of the expiry type can be retired")]
    UnsupportedRetireType {},

    #[error("Expiration can only be configured for expiry type currencies")]
    ExpiryNotConfigurable {},
}
