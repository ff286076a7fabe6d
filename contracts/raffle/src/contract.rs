use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Empty, Env, Event,
    MessageInfo, Order, QueryResponse, Reply, Response, StdError, StdResult, SubMsg,
    SubMsgResult, Timestamp, Uint128, Uint256,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;
use raffle_protocol::{
    request_id_from_events, CheckUpkeepResponse, VrfCoordinatorExecuteMsg,
    DEFAULT_REQUEST_CONFIRMATIONS, NUM_WORDS,
};

use crate::attributes::{
    ATTR_ACTION, ATTR_PLAYER, ATTR_REQUEST_ID, ATTR_WINNER, EVENT_TYPE_ENTERED,
    EVENT_TYPE_ROUND_CALCULATING, EVENT_TYPE_WINNER_PICKED,
};
use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, PlayersResponse, QueriedRound, QueryMsg,
    RoundResponse, RoundsResponse,
};
use crate::payment::entry_payment;
use crate::payout::{check_payout, prize_payout, PAYOUT_REPLY_ID};
use crate::selection::winner_index;
use crate::state::{
    player_at, players_push, Config, RaffleState, RoundOutcome, Status, CONFIG, PLAYERS, ROUNDS,
    STATUS,
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REQUEST_REPLY_ID: u64 = 1;

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let InstantiateMsg {
        vrf_coordinator,
        entrance_fee,
        gas_lane,
        subscription_id,
        callback_gas_limit,
        interval,
        request_confirmations,
    } = msg;

    let vrf_coordinator = deps
        .api
        .addr_validate(&vrf_coordinator)
        .map_err(|_| ContractError::InvalidCoordinatorAddress)?;
    ensure!(
        !entrance_fee.amount.is_zero(),
        ContractError::InvalidEntranceFee
    );

    let config = Config {
        entrance_fee,
        interval,
        vrf_coordinator,
        gas_lane,
        subscription_id,
        callback_gas_limit,
        request_confirmations: request_confirmations.unwrap_or(DEFAULT_REQUEST_CONFIRMATIONS),
        num_words: NUM_WORDS,
    };
    CONFIG.save(deps.storage, &config)?;

    let status = Status {
        state: RaffleState::Open,
        round: 1,
        players: 0,
        pot: Uint128::zero(),
        last_timestamp: env.block.time,
        pending_request: None,
        recent_winner: None,
    };
    STATUS.save(deps.storage, &status)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute("vrf_coordinator", config.vrf_coordinator)
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval", config.interval.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    ensure!(
        previous.contract == CONTRACT_NAME,
        ContractError::ContractNameMismatch {
            previous: previous.contract
        }
    );
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "migrate")
        .add_attribute("previous_version", previous.version)
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::EnterRaffle {} => execute_enter_raffle(deps, info),
        ExecuteMsg::PerformUpkeep { perform_data } => {
            execute_perform_upkeep(deps, env, perform_data)
        }
        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => execute_fulfill_random_words(deps, env, info, request_id, random_words),
    }
}

fn execute_enter_raffle(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut status = STATUS.load(deps.storage)?;

    ensure!(
        status.state == RaffleState::Open,
        ContractError::RoundNotOpen
    );
    let payment = entry_payment(&config.entrance_fee, &info.funds)?;

    players_push(deps.storage, &mut status, &info.sender)?;
    status.pot = status.pot.checked_add(payment).map_err(StdError::from)?;
    STATUS.save(deps.storage, &status)?;

    let event = Event::new(EVENT_TYPE_ENTERED).add_attribute(ATTR_PLAYER, info.sender.as_str());
    Ok(Response::new()
        .add_event(event)
        .add_attribute(ATTR_ACTION, "enter_raffle")
        .add_attribute("round", status.round.to_string())
        .add_attribute("pot", status.pot.to_string()))
}

/// The bot's readiness check is never trusted. The predicate is evaluated again here
/// and the request is only sent if it holds.
fn execute_perform_upkeep(
    deps: DepsMut,
    env: Env,
    _perform_data: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut status = STATUS.load(deps.storage)?;

    if !status.is_ready(&config, env.block.time) {
        return Err(ContractError::UpkeepNotNeeded {
            pot: status.pot,
            players: status.players,
            state: status.state,
        });
    }

    status.state = RaffleState::Calculating;
    STATUS.save(deps.storage, &status)?;

    let request = VrfCoordinatorExecuteMsg::RequestRandomWords {
        key_hash: config.gas_lane,
        sub_id: config.subscription_id,
        min_confirmations: config.request_confirmations,
        callback_gas_limit: config.callback_gas_limit,
        num_words: config.num_words,
    }
    .into_wasm_msg(config.vrf_coordinator)?;

    // The coordinator reports the request ID in its events, which we only get via reply
    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(request, REQUEST_REPLY_ID))
        .add_attribute(ATTR_ACTION, "perform_upkeep")
        .add_attribute("round", status.round.to_string()))
}

fn execute_fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(
        info.sender,
        config.vrf_coordinator,
        ContractError::UnauthorizedFulfillment
    );

    let mut status = STATUS.load(deps.storage)?;
    ensure!(
        status.state == RaffleState::Calculating && status.pending_request == Some(request_id),
        ContractError::UnknownRequest { request_id }
    );

    let random_word = random_words
        .first()
        .copied()
        .ok_or(ContractError::InvalidRandomness)?;
    // Cannot fail as long as a request is never sent for an empty round
    let index =
        winner_index(random_word, status.players).ok_or(ContractError::InvalidRandomness)?;
    let winner = PLAYERS.load(deps.storage, (status.round, index))?;

    let prize = Coin {
        denom: config.entrance_fee.denom,
        amount: status.pot,
    };
    let resolved_round = status.round;
    ROUNDS.save(
        deps.storage,
        resolved_round,
        &RoundOutcome {
            winner: winner.clone(),
            prize: prize.clone(),
            players: status.players,
            request_id,
            random_word,
            resolved: env.block.time,
        },
    )?;

    status.recent_winner = Some(winner.clone());
    status.round += 1;
    status.players = 0;
    status.pot = Uint128::zero();
    status.state = RaffleState::Open;
    status.pending_request = None;
    status.last_timestamp = env.block.time;
    STATUS.save(deps.storage, &status)?;

    let payout = prize_payout(deps.as_ref(), &env, &winner, prize.clone())?;

    let event = Event::new(EVENT_TYPE_WINNER_PICKED).add_attribute(ATTR_WINNER, winner.as_str());
    Ok(Response::new()
        .add_submessage(payout)
        .add_event(event)
        .add_attribute(ATTR_ACTION, "fulfill_random_words")
        .add_attribute("round", resolved_round.to_string())
        .add_attribute(ATTR_REQUEST_ID, request_id.to_string())
        .add_attribute("prize", prize.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        REQUEST_REPLY_ID => reply_request_registered(deps, reply.result),
        PAYOUT_REPLY_ID => {
            check_payout(reply.result)?;
            Ok(Response::new())
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

fn reply_request_registered(
    deps: DepsMut,
    result: SubMsgResult,
) -> Result<Response, ContractError> {
    let response = result.into_result().map_err(StdError::generic_err)?;
    let request_id =
        request_id_from_events(&response.events).ok_or(ContractError::MissingRequestId)?;

    let mut status = STATUS.load(deps.storage)?;
    status.pending_request = Some(request_id);
    STATUS.save(deps.storage, &status)?;

    let event = Event::new(EVENT_TYPE_ROUND_CALCULATING)
        .add_attribute(ATTR_REQUEST_ID, request_id.to_string());
    Ok(Response::new()
        .add_event(event)
        .add_attribute(ATTR_ACTION, "request_registered"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<QueryResponse, ContractError> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::EntranceFee {} => to_json_binary(&CONFIG.load(deps.storage)?.entrance_fee)?,
        QueryMsg::Interval {} => to_json_binary(&CONFIG.load(deps.storage)?.interval)?,
        QueryMsg::RaffleState {} => to_json_binary(&STATUS.load(deps.storage)?.state)?,
        QueryMsg::NumberOfPlayers {} => to_json_binary(&STATUS.load(deps.storage)?.players)?,
        QueryMsg::Player { index } => to_json_binary(&query_player(deps, index)?)?,
        QueryMsg::Players { start_after, limit } => {
            to_json_binary(&query_players(deps, start_after, limit)?)?
        }
        QueryMsg::RecentWinner {} => to_json_binary(&STATUS.load(deps.storage)?.recent_winner)?,
        QueryMsg::LatestTimestamp {} => {
            to_json_binary(&STATUS.load(deps.storage)?.last_timestamp)?
        }
        QueryMsg::Pot {} => to_json_binary(&query_pot(deps)?)?,
        QueryMsg::PendingRequest {} => {
            to_json_binary(&STATUS.load(deps.storage)?.pending_request)?
        }
        QueryMsg::NumWords {} => to_json_binary(&CONFIG.load(deps.storage)?.num_words)?,
        QueryMsg::RequestConfirmations {} => {
            to_json_binary(&CONFIG.load(deps.storage)?.request_confirmations)?
        }
        QueryMsg::Round { round } => to_json_binary(&query_round(deps, round)?)?,
        QueryMsg::Rounds { start_after, limit } => {
            to_json_binary(&query_rounds(deps, start_after, limit)?)?
        }
        QueryMsg::CheckUpkeep { check_data } => {
            to_json_binary(&query_check_upkeep(deps, env.block.time, check_data)?)?
        }
    };
    Ok(response)
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_player(deps: Deps, index: u32) -> Result<Addr, ContractError> {
    let status = STATUS.load(deps.storage)?;
    player_at(deps.storage, &status, index)?.ok_or(ContractError::IndexOutOfRange { index })
}

fn query_players(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<PlayersResponse> {
    let status = STATUS.load(deps.storage)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let players = PLAYERS
        .prefix(status.round)
        .range(
            deps.storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| item.map(|(_index, player)| player))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(PlayersResponse { players })
}

fn query_pot(deps: Deps) -> StdResult<Coin> {
    let config = CONFIG.load(deps.storage)?;
    let status = STATUS.load(deps.storage)?;
    Ok(Coin {
        denom: config.entrance_fee.denom,
        amount: status.pot,
    })
}

fn query_round(deps: Deps, round: u64) -> StdResult<RoundResponse> {
    let outcome = ROUNDS.may_load(deps.storage, round)?;
    Ok(RoundResponse { round, outcome })
}

fn query_rounds(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<RoundsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let rounds = ROUNDS
        .range(
            deps.storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| item.map(|(round, outcome)| QueriedRound { round, outcome }))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(RoundsResponse { rounds })
}

fn query_check_upkeep(
    deps: Deps,
    now: Timestamp,
    check_data: Binary,
) -> StdResult<CheckUpkeepResponse> {
    let config = CONFIG.load(deps.storage)?;
    let status = STATUS.load(deps.storage)?;
    Ok(CheckUpkeepResponse {
        upkeep_needed: status.is_ready(&config, now),
        perform_data: check_data,
    })
}
