// Testing utils. See tests folder for actual tests.

pub mod bank;
pub mod coordinator;

use cosmwasm_std::{coin, Addr, Attribute, Coin};
use cw_multi_test::{App, Bank, BankSudo, SudoMsg};

/// Gets the value of the first attribute with the given key
pub fn first_attr(data: impl AsRef<[Attribute]>, search_key: &str) -> Option<String> {
    data.as_ref().iter().find_map(|a| {
        if a.key == search_key {
            Some(a.value.clone())
        } else {
            None
        }
    })
}

pub fn mint_native<B: Bank>(app: &mut App<B>, beneficiary: &Addr, denom: &str, amount: u128) {
    app.sudo(SudoMsg::Bank(BankSudo::Mint {
        to_address: beneficiary.to_string(),
        amount: vec![coin(amount, denom)],
    }))
    .unwrap();
}

pub fn query_balance_native<B: Bank>(app: &App<B>, address: &Addr, denom: &str) -> Coin {
    app.wrap().query_balance(address, denom).unwrap()
}
