use cosmwasm_std::{ensure, Addr, BankMsg, Coin, Deps, Env, SubMsg, SubMsgResult};

use crate::error::ContractError;

pub const PAYOUT_REPLY_ID: u64 = 2;

/// Creates the transfer of the prize to the winner.
///
/// The contract balance must cover the prize. The transfer replies on error so
/// that a failed send surfaces as [`ContractError::PayoutFailed`] and reverts the
/// whole resolution.
pub fn prize_payout(
    deps: Deps,
    env: &Env,
    winner: &Addr,
    prize: Coin,
) -> Result<SubMsg, ContractError> {
    let balance = deps
        .querier
        .query_balance(env.contract.address.clone(), prize.denom.clone())?;
    ensure!(balance.amount >= prize.amount, ContractError::PayoutFailed);

    let msg = BankMsg::Send {
        to_address: winner.to_string(),
        amount: vec![prize],
    };
    Ok(SubMsg::reply_on_error(msg, PAYOUT_REPLY_ID))
}

/// Handles the reply of a prize transfer
pub fn check_payout(result: SubMsgResult) -> Result<(), ContractError> {
    match result {
        SubMsgResult::Ok(_) => Ok(()),
        SubMsgResult::Err(_) => Err(ContractError::PayoutFailed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_dependencies_with_balance, mock_env};
    use cosmwasm_std::{coin, coins, CosmosMsg, ReplyOn};

    #[test]
    fn prize_payout_works() {
        let deps = mock_dependencies_with_balance(&coins(500, "uraffle"));
        let winner = Addr::unchecked("winner");

        let msg = prize_payout(deps.as_ref(), &mock_env(), &winner, coin(400, "uraffle")).unwrap();
        assert_eq!(msg.id, PAYOUT_REPLY_ID);
        assert_eq!(msg.reply_on, ReplyOn::Error);
        assert_eq!(
            msg.msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "winner".to_string(),
                amount: coins(400, "uraffle"),
            })
        );

        // full balance
        prize_payout(deps.as_ref(), &mock_env(), &winner, coin(500, "uraffle")).unwrap();
    }

    #[test]
    fn prize_payout_fails_for_insufficient_balance() {
        let winner = Addr::unchecked("winner");

        let deps = mock_dependencies();
        let err = prize_payout(deps.as_ref(), &mock_env(), &winner, coin(400, "uraffle"))
            .unwrap_err();
        assert_eq!(err, ContractError::PayoutFailed);

        let deps = mock_dependencies_with_balance(&[coin(399, "uraffle"), coin(1000, "other")]);
        let err = prize_payout(deps.as_ref(), &mock_env(), &winner, coin(400, "uraffle"))
            .unwrap_err();
        assert_eq!(err, ContractError::PayoutFailed);
    }

    #[test]
    fn check_payout_works() {
        check_payout(SubMsgResult::Err("insufficient funds".to_string())).unwrap_err();
        let err = check_payout(SubMsgResult::Err("blocked address".to_string())).unwrap_err();
        assert_eq!(err, ContractError::PayoutFailed);
    }
}
