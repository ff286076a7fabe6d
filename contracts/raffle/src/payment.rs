use cosmwasm_std::{ensure, Coin, StdError, Uint128};

use crate::error::ContractError;

/// Sums up the funds sent with an entry and checks them against the entrance fee.
///
/// Only the fee denom is accepted. Everything above the fee is kept as part of the
/// entry, no change is returned.
pub fn entry_payment(fee: &Coin, funds: &[Coin]) -> Result<Uint128, ContractError> {
    let mut payment = Uint128::zero();
    for fund in funds {
        if fund.denom != fee.denom {
            return Err(ContractError::InvalidFunds {
                denom: fund.denom.clone(),
            });
        }
        payment = payment.checked_add(fund.amount).map_err(StdError::from)?;
    }
    ensure!(payment >= fee.amount, ContractError::InsufficientPayment);
    Ok(payment)
}
