use anyhow::bail;
use cosmwasm_std::{
    Addr, Api, BankMsg, BankQuery, Binary, BlockInfo, CustomMsg, CustomQuery, Querier, StdResult,
    Storage,
};
use cw_multi_test::{AppResponse, Bank, BankKeeper, BankSudo, CosmosRouter, Module};
use cw_storage_plus::Map;
use serde::de::DeserializeOwned;

/// Recipients that cannot receive bank sends, like module accounts on a real chain
const BLOCKED_RECIPIENTS: Map<&str, bool> = Map::new("blocked_recipients");

/// A [`BankKeeper`] which rejects sends to blocked recipients
#[derive(Default)]
pub struct BlockableBank {
    inner: BankKeeper,
}

impl BlockableBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(&self, storage: &mut dyn Storage, recipient: &Addr) -> StdResult<()> {
        BLOCKED_RECIPIENTS.save(storage, recipient.as_str(), &true)
    }

    pub fn unblock(&self, storage: &mut dyn Storage, recipient: &Addr) {
        BLOCKED_RECIPIENTS.remove(storage, recipient.as_str());
    }
}

impl Module for BlockableBank {
    type ExecT = BankMsg;
    type QueryT = BankQuery;
    type SudoT = BankSudo;

    fn execute<ExecC, QueryC>(
        &self,
        api: &dyn Api,
        storage: &mut dyn Storage,
        router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        block: &BlockInfo,
        sender: Addr,
        msg: BankMsg,
    ) -> anyhow::Result<AppResponse>
    where
        ExecC: CustomMsg + DeserializeOwned + 'static,
        QueryC: CustomQuery + DeserializeOwned + 'static,
    {
        if let BankMsg::Send { to_address, .. } = &msg {
            if BLOCKED_RECIPIENTS.has(storage, to_address.as_str()) {
                bail!("{to_address} is not allowed to receive funds");
            }
        }
        self.inner
            .execute(api, storage, router, block, sender, msg)
    }

    fn query(
        &self,
        api: &dyn Api,
        storage: &dyn Storage,
        querier: &dyn Querier,
        block: &BlockInfo,
        request: BankQuery,
    ) -> anyhow::Result<Binary> {
        self.inner.query(api, storage, querier, block, request)
    }

    fn sudo<ExecC, QueryC>(
        &self,
        api: &dyn Api,
        storage: &mut dyn Storage,
        router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        block: &BlockInfo,
        msg: BankSudo,
    ) -> anyhow::Result<AppResponse>
    where
        ExecC: CustomMsg + DeserializeOwned + 'static,
        QueryC: CustomQuery + DeserializeOwned + 'static,
    {
        self.inner.sudo(api, storage, router, block, msg)
    }
}

impl Bank for BlockableBank {}
