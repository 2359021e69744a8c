use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order,
    QuerierWrapper, Response, StdResult, Storage, WasmMsg,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use shared::{
    Asset, CommunityExecuteMsg, CommunityQueryMsg, CommunityResponse, IsMemberResponse,
    MemberCategory, MemberInfo, MembersResponse, SchedulerExecuteMsg, TokenSymbol,
};

use crate::error::ContractError;
use crate::msg::{
    BalanceResponse, ConfigResponse, CurrenciesResponse, CurrencyResponse, ExecuteMsg,
    ExpiryOptionsResponse, InstantiateMsg, QueryMsg,
};
use crate::state::{
    Account, Config, CurrencyStats, ExpiryOptions, TokenType, ACCOUNTS, CONFIG, EXPIRY_OPTIONS,
    STATS,
};

const CONTRACT_NAME: &str = "crates.io:community-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const MAX_MEMO_BYTES: usize = 256;

/// Page size used when walking the community member index
const MEMBER_PAGE_SIZE: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    let config = Config {
        community_contract: deps.api.addr_validate(&msg.community_contract)?,
        scheduler: deps.api.addr_validate(&msg.scheduler)?,
        admin,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("community_contract", config.community_contract)
        .add_attribute("scheduler", config.scheduler)
        .add_attribute("admin", config.admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Create {
            issuer,
            max_supply,
            min_balance,
            token_type,
        } => execute_create(deps, env, info, issuer, max_supply, min_balance, token_type),
        ExecuteMsg::Update {
            max_supply,
            min_balance,
        } => execute_update(deps, info, max_supply, min_balance),
        ExecuteMsg::Issue { to, quantity, memo } => {
            execute_issue(deps, env, info, to, quantity, memo)
        }
        ExecuteMsg::Transfer {
            from,
            to,
            quantity,
            memo,
        } => execute_transfer(deps, env, info, from, to, quantity, memo),
        ExecuteMsg::Retire {
            currency,
            category,
            memo,
        } => execute_retire(deps, env, info, currency, category, memo),
        ExecuteMsg::InitAccount {
            currency,
            account,
            inviter,
        } => execute_init_account(deps, env, info, currency, account, inviter),
        ExecuteMsg::SetExpiry {
            currency,
            natural_expiration_period,
            juridical_expiration_period,
            renovation_amount,
        } => execute_set_expiry(
            deps,
            env,
            info,
            currency,
            natural_expiration_period,
            juridical_expiration_period,
            renovation_amount,
        ),
    }
}

pub fn execute_create(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    issuer: String,
    max_supply: Asset,
    min_balance: Asset,
    token_type: TokenType,
) -> Result<Response, ContractError> {
    let symbol = max_supply.symbol.clone();
    if !symbol.is_valid() {
        return Err(ContractError::InvalidSymbol {});
    }
    if min_balance.symbol != symbol {
        return Err(ContractError::SymbolMismatch {});
    }
    if !max_supply.is_positive() {
        return Err(ContractError::NonPositiveAmount {});
    }

    let config = CONFIG.load(deps.storage)?;
    let community = find_community(&deps.querier, &config, &symbol)?;

    // Only the community creator can introduce its currency
    if info.sender != community.creator {
        return Err(ContractError::Unauthorized {});
    }

    // MCC min_balance is a credit line: how far below zero a balance may go
    if token_type == TokenType::Mcc && min_balance.is_positive() {
        return Err(ContractError::InvalidMinBalance {});
    }

    if STATS.may_load(deps.storage, symbol.code.as_str())?.is_some() {
        return Err(ContractError::DuplicateCurrency {});
    }

    let issuer_addr = deps.api.addr_validate(&issuer)?;
    let stats = CurrencyStats {
        supply: Asset::zero(symbol.clone()),
        max_supply,
        min_balance,
        issuer: issuer_addr.clone(),
        token_type,
    };
    STATS.save(deps.storage, symbol.code.as_str(), &stats)?;

    // Opening balance row for the issuer
    ACCOUNTS.save(
        deps.storage,
        (&issuer_addr, symbol.code.as_str()),
        &Account {
            balance: Asset::zero(symbol.clone()),
            last_activity: env.block.time.seconds(),
        },
    )?;

    let mut res = Response::new()
        .add_attribute("method", "create")
        .add_attribute("symbol", symbol.code.clone())
        .add_attribute("issuer", issuer_addr.clone())
        .add_attribute("notify", community.creator.clone());

    if issuer_addr != community.creator {
        res = res
            .add_attribute("notify", issuer_addr.clone())
            .add_message(WasmMsg::Execute {
                contract_addr: config.community_contract.to_string(),
                msg: to_json_binary(&CommunityExecuteMsg::Netlink {
                    symbol,
                    new_user: issuer_addr.to_string(),
                    inviter: community.creator.to_string(),
                })?,
                funds: vec![],
            });
    }

    Ok(res)
}

pub fn execute_update(
    deps: DepsMut,
    info: MessageInfo,
    max_supply: Asset,
    min_balance: Asset,
) -> Result<Response, ContractError> {
    let symbol = max_supply.symbol.clone();
    if !symbol.is_valid() {
        return Err(ContractError::InvalidSymbol {});
    }
    if min_balance.symbol != symbol {
        return Err(ContractError::SymbolMismatch {});
    }
    if !max_supply.is_positive() {
        return Err(ContractError::NonPositiveAmount {});
    }

    let mut stats = STATS
        .may_load(deps.storage, symbol.code.as_str())?
        .ok_or(ContractError::CurrencyNotFound {})?;
    if stats.supply.symbol != symbol {
        return Err(ContractError::SymbolMismatch {});
    }
    if info.sender != stats.issuer {
        return Err(ContractError::Unauthorized {});
    }

    // Existing balances are not re-checked against the new limits; they are
    // only constrained again on their next mutation.
    stats.max_supply = max_supply;
    stats.min_balance = min_balance;
    STATS.save(deps.storage, symbol.code.as_str(), &stats)?;

    Ok(Response::new()
        .add_attribute("method", "update")
        .add_attribute("symbol", symbol.code)
        .add_attribute("max_supply", stats.max_supply.to_string())
        .add_attribute("min_balance", stats.min_balance.to_string()))
}

pub fn execute_issue(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    quantity: Asset,
    memo: String,
) -> Result<Response, ContractError> {
    let symbol = quantity.symbol.clone();
    if !symbol.is_valid() {
        return Err(ContractError::InvalidSymbol {});
    }
    validate_memo(&memo)?;

    let mut stats = STATS
        .may_load(deps.storage, symbol.code.as_str())?
        .ok_or(ContractError::CurrencyNotFound {})?;

    // Issuance is reachable only through the platform's privileged path
    let config = CONFIG.load(deps.storage)?;
    if !is_platform(&config, &env, &info.sender) {
        return Err(ContractError::Unauthorized {});
    }

    let to_addr = deps.api.addr_validate(&to)?;
    if !quantity.is_positive() {
        return Err(ContractError::NonPositiveAmount {});
    }
    if symbol != stats.supply.symbol {
        return Err(ContractError::SymbolMismatch {});
    }

    let new_supply = stats.supply.checked_add(&quantity)?;
    if new_supply.amount > stats.max_supply.amount {
        return Err(ContractError::SupplyExceeded {});
    }
    stats.supply = new_supply;
    STATS.save(deps.storage, symbol.code.as_str(), &stats)?;

    add_balance(
        deps.storage,
        env.block.time.seconds(),
        &stats.issuer,
        &quantity,
    )?;

    let mut res = Response::new()
        .add_attribute("method", "issue")
        .add_attribute("symbol", symbol.code)
        .add_attribute("to", to_addr.clone())
        .add_attribute("quantity", quantity.to_string());

    // Freshly minted tokens land on the issuer; forward them when they were
    // issued for somebody else.
    if to_addr != stats.issuer {
        res = res
            .add_attribute("notify", stats.issuer.clone())
            .add_message(WasmMsg::Execute {
                contract_addr: env.contract.address.to_string(),
                msg: to_json_binary(&ExecuteMsg::Transfer {
                    from: stats.issuer.to_string(),
                    to: to_addr.to_string(),
                    quantity,
                    memo,
                })?,
                funds: vec![],
            });
    }

    Ok(res)
}

pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    to: String,
    quantity: Asset,
    memo: String,
) -> Result<Response, ContractError> {
    let from_addr = deps.api.addr_validate(&from)?;
    let to_addr = deps.api.addr_validate(&to)?;
    if from_addr == to_addr {
        return Err(ContractError::SelfTransfer {});
    }

    let config = CONFIG.load(deps.storage)?;
    if info.sender != from_addr && !is_platform(&config, &env, &info.sender) {
        return Err(ContractError::Unauthorized {});
    }

    let symbol = quantity.symbol.clone();
    let stats = STATS
        .may_load(deps.storage, symbol.code.as_str())?
        .ok_or(ContractError::CurrencyNotFound {})?;

    if !quantity.is_positive() {
        return Err(ContractError::NonPositiveAmount {});
    }
    if symbol != stats.max_supply.symbol {
        return Err(ContractError::SymbolMismatch {});
    }
    validate_memo(&memo)?;

    // Both ends must be linked into the currency's community
    if !is_member(&deps.querier, &config, &symbol, &from_addr)? {
        return Err(ContractError::NotAMember {
            account: from_addr.to_string(),
        });
    }
    if !is_member(&deps.querier, &config, &symbol, &to_addr)? {
        return Err(ContractError::NotAMember {
            account: to_addr.to_string(),
        });
    }

    let now = env.block.time.seconds();
    sub_balance(deps.storage, now, &from_addr, &quantity, &stats)?;
    add_balance(deps.storage, now, &to_addr, &quantity)?;

    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", from_addr)
        .add_attribute("to", to_addr)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("memo", memo))
}

pub fn execute_retire(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    currency: TokenSymbol,
    category: MemberCategory,
    memo: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // Deferred jobs arrive from the scheduler carrying their own authority
    if !is_platform(&config, &env, &info.sender) && info.sender != config.scheduler {
        return Err(ContractError::Unauthorized {});
    }

    if !currency.is_valid() {
        return Err(ContractError::InvalidSymbol {});
    }
    validate_memo(&memo)?;

    let mut stats = STATS
        .may_load(deps.storage, currency.code.as_str())?
        .ok_or(ContractError::CurrencyNotFound {})?;
    if stats.token_type != TokenType::Expiry {
        return Err(ContractError::UnsupportedRetireType {});
    }
    if currency != stats.supply.symbol {
        return Err(ContractError::SymbolMismatch {});
    }

    let members = members_by_category(&deps.querier, &config, &currency, &category)?;

    let now = env.block.time.seconds();
    let mut retired: u32 = 0;
    for member in &members {
        let key = (&member.account, currency.code.as_str());
        if let Some(mut account) = ACCOUNTS.may_load(deps.storage, key)? {
            if account.balance.is_zero() {
                continue;
            }
            // Supply shrinks by exactly the balance taken out of circulation
            stats.supply = stats.supply.checked_sub(&account.balance)?;
            account.balance = Asset::zero(currency.clone());
            account.last_activity = now;
            ACCOUNTS.save(deps.storage, key, &account)?;
            retired += 1;
        }
    }
    STATS.save(deps.storage, currency.code.as_str(), &stats)?;

    Ok(Response::new()
        .add_attribute("method", "retire")
        .add_attribute("symbol", currency.code)
        .add_attribute("category", category.to_string())
        .add_attribute("retired_accounts", retired.to_string())
        .add_attribute("memo", memo))
}

pub fn execute_init_account(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    currency: TokenSymbol,
    account: String,
    inviter: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // The community directory authenticates the inviter when it is the
    // caller; any other caller needs the contract's own authority.
    if info.sender != config.community_contract && !is_platform(&config, &env, &info.sender) {
        return Err(ContractError::Unauthorized {});
    }

    let account_addr = deps.api.addr_validate(&account)?;
    let inviter_addr = deps.api.addr_validate(&inviter)?;

    let stats = STATS
        .may_load(deps.storage, currency.code.as_str())?
        .ok_or(ContractError::CurrencyNotFound {})?;

    // Initialization does not grant membership, it only opens the row
    if !is_member(&deps.querier, &config, &currency, &account_addr)? {
        return Err(ContractError::NotAMember {
            account: account_addr.to_string(),
        });
    }

    let key = (&account_addr, currency.code.as_str());
    if ACCOUNTS.may_load(deps.storage, key)?.is_none() {
        ACCOUNTS.save(
            deps.storage,
            key,
            &Account {
                balance: Asset::zero(stats.supply.symbol),
                last_activity: env.block.time.seconds(),
            },
        )?;
    }

    Ok(Response::new()
        .add_attribute("method", "init_account")
        .add_attribute("symbol", currency.code)
        .add_attribute("account", account_addr)
        .add_attribute("inviter", inviter_addr))
}

pub fn execute_set_expiry(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    currency: TokenSymbol,
    natural_expiration_period: u64,
    juridical_expiration_period: u64,
    renovation_amount: Asset,
) -> Result<Response, ContractError> {
    if !currency.is_valid() {
        return Err(ContractError::InvalidSymbol {});
    }

    let stats = STATS
        .may_load(deps.storage, currency.code.as_str())?
        .ok_or(ContractError::CurrencyNotFound {})?;
    if stats.token_type == TokenType::Mcc {
        return Err(ContractError::ExpiryNotConfigurable {});
    }
    if renovation_amount.symbol != currency || stats.supply.symbol != currency {
        return Err(ContractError::SymbolMismatch {});
    }
    if info.sender != stats.issuer {
        return Err(ContractError::Unauthorized {});
    }

    // Full replace, whether or not options existed before
    let opts = ExpiryOptions {
        currency: currency.clone(),
        natural_expiration_period,
        juridical_expiration_period,
        renovation_amount: renovation_amount.clone(),
    };
    EXPIRY_OPTIONS.save(deps.storage, currency.code.as_str(), &opts)?;

    let config = CONFIG.load(deps.storage)?;
    let mut msgs: Vec<WasmMsg> = vec![];

    // Every natural member receives the renovation amount right away;
    // juridical members are only subject to the scheduled retirement.
    let renewal_memo = format!(
        "Token renewal: you received {}, valid for {} seconds",
        renovation_amount, natural_expiration_period
    );
    let naturals = members_by_category(
        &deps.querier,
        &config,
        &currency,
        &MemberCategory::Natural,
    )?;
    for member in &naturals {
        msgs.push(WasmMsg::Execute {
            contract_addr: env.contract.address.to_string(),
            msg: to_json_binary(&ExecuteMsg::Issue {
                to: member.account.to_string(),
                quantity: renovation_amount.clone(),
                memo: renewal_memo.clone(),
            })?,
            funds: vec![],
        });
    }

    // One retirement job per category, keyed deterministically so that
    // rescheduling replaces the pending job instead of duplicating it
    for (category, period) in [
        (MemberCategory::Natural, natural_expiration_period),
        (MemberCategory::Juridical, juridical_expiration_period),
    ] {
        let retire = ExecuteMsg::Retire {
            currency: currency.clone(),
            category: category.clone(),
            memo: format!("Tokens expired {} seconds after emission", period),
        };
        msgs.push(WasmMsg::Execute {
            contract_addr: config.scheduler.to_string(),
            msg: to_json_binary(&SchedulerExecuteMsg::Schedule {
                job_id: retire_job_id(&currency, &category),
                target: env.contract.address.to_string(),
                msg: to_json_binary(&retire)?,
                delay_seconds: period,
                replace_existing: true,
            })?,
            funds: vec![],
        });
    }

    Ok(Response::new()
        .add_attribute("method", "set_expiry")
        .add_attribute("symbol", currency.code)
        .add_attribute(
            "natural_expiration_period",
            natural_expiration_period.to_string(),
        )
        .add_attribute(
            "juridical_expiration_period",
            juridical_expiration_period.to_string(),
        )
        .add_attribute("renovation_amount", renovation_amount.to_string())
        .add_messages(msgs))
}

/// Credit `value` to the recipient, opening the balance row when missing.
fn add_balance(
    storage: &mut dyn Storage,
    now: u64,
    recipient: &Addr,
    value: &Asset,
) -> Result<(), ContractError> {
    if !value.is_positive() {
        return Err(ContractError::NonPositiveAmount {});
    }

    let key = (recipient, value.symbol.code.as_str());
    let updated = match ACCOUNTS.may_load(storage, key)? {
        None => Account {
            balance: value.clone(),
            last_activity: now,
        },
        Some(account) => Account {
            balance: account.balance.checked_add(value)?,
            last_activity: now,
        },
    };
    ACCOUNTS.save(storage, key, &updated)?;
    Ok(())
}

/// Debit `value` from the owner, enforcing the currency's credit line. A
/// missing row may open straight into permitted overdraft.
fn sub_balance(
    storage: &mut dyn Storage,
    now: u64,
    owner: &Addr,
    value: &Asset,
    stats: &CurrencyStats,
) -> Result<(), ContractError> {
    if !value.is_positive() {
        return Err(ContractError::NonPositiveAmount {});
    }

    let key = (owner, value.symbol.code.as_str());
    let updated = match ACCOUNTS.may_load(storage, key)? {
        None => {
            let opening = value.checked_neg()?;
            if opening.amount < stats.min_balance.amount {
                return Err(ContractError::OverdrawnLimit {});
            }
            Account {
                balance: opening,
                last_activity: now,
            }
        }
        Some(account) => {
            let new_balance = account.balance.checked_sub(value)?;
            if new_balance.amount < stats.min_balance.amount {
                return Err(ContractError::OverdrawnLimit {});
            }
            Account {
                balance: new_balance,
                last_activity: now,
            }
        }
    };
    ACCOUNTS.save(storage, key, &updated)?;
    Ok(())
}

fn is_platform(config: &Config, env: &Env, sender: &Addr) -> bool {
    sender == &env.contract.address || sender == &config.admin
}

fn validate_memo(memo: &str) -> Result<(), ContractError> {
    if memo.len() > MAX_MEMO_BYTES {
        return Err(ContractError::MemoTooLong {});
    }
    Ok(())
}

fn find_community(
    querier: &QuerierWrapper,
    config: &Config,
    symbol: &TokenSymbol,
) -> Result<CommunityResponse, ContractError> {
    querier
        .query_wasm_smart(
            config.community_contract.clone(),
            &CommunityQueryMsg::Community {
                symbol: symbol.clone(),
            },
        )
        .map_err(|_| ContractError::CommunityNotFound {})
}

fn is_member(
    querier: &QuerierWrapper,
    config: &Config,
    symbol: &TokenSymbol,
    account: &Addr,
) -> StdResult<bool> {
    let res: IsMemberResponse = querier.query_wasm_smart(
        config.community_contract.clone(),
        &CommunityQueryMsg::IsMember {
            symbol: symbol.clone(),
            account: account.to_string(),
        },
    )?;
    Ok(res.is_member)
}

/// Walk the full member index of one category, page by page.
fn members_by_category(
    querier: &QuerierWrapper,
    config: &Config,
    symbol: &TokenSymbol,
    category: &MemberCategory,
) -> StdResult<Vec<MemberInfo>> {
    let mut members: Vec<MemberInfo> = vec![];
    let mut start_after: Option<String> = None;
    loop {
        let page: MembersResponse = querier.query_wasm_smart(
            config.community_contract.clone(),
            &CommunityQueryMsg::Members {
                symbol: symbol.clone(),
                category: Some(category.clone()),
                start_after: start_after.clone(),
                limit: Some(MEMBER_PAGE_SIZE),
            },
        )?;
        let page_len = page.members.len();
        members.extend(page.members);
        if page_len < MEMBER_PAGE_SIZE as usize {
            break;
        }
        start_after = members.last().map(|m| m.account.to_string());
    }
    Ok(members)
}

fn retire_job_id(currency: &TokenSymbol, category: &MemberCategory) -> String {
    format!("retire/{}/{}", currency.code, category)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::GetCurrency { symbol } => to_json_binary(&query_currency(deps, symbol)?),
        QueryMsg::GetCurrencies { start_after, limit } => {
            to_json_binary(&query_currencies(deps, start_after, limit)?)
        }
        QueryMsg::GetBalance { owner, symbol } => {
            to_json_binary(&query_balance(deps, owner, symbol)?)
        }
        QueryMsg::GetExpiryOptions { symbol } => {
            to_json_binary(&query_expiry_options(deps, symbol)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        community_contract: config.community_contract,
        scheduler: config.scheduler,
        admin: config.admin,
    })
}

fn query_currency(deps: Deps, symbol: String) -> StdResult<CurrencyResponse> {
    let stats = STATS.load(deps.storage, symbol.as_str())?;
    Ok(currency_to_response(stats))
}

fn query_currencies(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<CurrenciesResponse> {
    let limit = limit.unwrap_or(10) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let currencies = STATS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, stats) = item?;
            Ok(currency_to_response(stats))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(CurrenciesResponse { currencies })
}

fn query_balance(deps: Deps, owner: String, symbol: String) -> StdResult<BalanceResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let stats = STATS.load(deps.storage, symbol.as_str())?;

    Ok(
        match ACCOUNTS.may_load(deps.storage, (&owner_addr, symbol.as_str()))? {
            Some(account) => BalanceResponse {
                balance: account.balance,
                last_activity: Some(account.last_activity),
            },
            None => BalanceResponse {
                balance: Asset::zero(stats.supply.symbol),
                last_activity: None,
            },
        },
    )
}

fn query_expiry_options(deps: Deps, symbol: String) -> StdResult<ExpiryOptionsResponse> {
    let opts = EXPIRY_OPTIONS.load(deps.storage, symbol.as_str())?;
    Ok(ExpiryOptionsResponse {
        currency: opts.currency,
        natural_expiration_period: opts.natural_expiration_period,
        juridical_expiration_period: opts.juridical_expiration_period,
        renovation_amount: opts.renovation_amount,
    })
}

fn currency_to_response(stats: CurrencyStats) -> CurrencyResponse {
    CurrencyResponse {
        symbol: stats.supply.symbol.clone(),
        supply: stats.supply,
        max_supply: stats.max_supply,
        min_balance: stats.min_balance,
        issuer: stats.issuer,
        token_type: stats.token_type,
    }
}
