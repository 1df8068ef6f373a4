//! Transaction handlers.

use tracing::debug;

use atcc_store::{QueryGuard, TransactionContext};
use atcc_types::VoterRecord;

use crate::seed::seed_records;
use crate::ContractError;

/// The voter-registry contract.
///
/// Stateless: everything lives in the world state reached through the
/// transaction context of each call.
#[derive(Clone, Copy, Debug, Default)]
pub struct VoterRegistry;

impl VoterRegistry {
    /// Write the seed records, overwriting whatever is stored under their ids.
    ///
    /// Stops at the first failure. Writes already issued are left to the
    /// host's transaction semantics.
    pub fn init_ledger(&self, ctx: &dyn TransactionContext) -> Result<(), ContractError> {
        let stub = ctx.stub();
        let records = seed_records();
        for record in &records {
            let bytes = record.to_bytes()?;
            stub.put_state(&record.id, &bytes).map_err(ContractError::PutState)?;
        }
        debug!(tx_id = stub.tx_id(), count = records.len(), "ledger seeded");
        Ok(())
    }

    /// Store a new record under its id. Fails if the id is taken.
    pub fn create_record(
        &self,
        ctx: &dyn TransactionContext,
        record: VoterRecord,
    ) -> Result<(), ContractError> {
        if self.record_exists(ctx, &record.id)? {
            return Err(ContractError::AlreadyExists(record.id));
        }
        let bytes = record.to_bytes()?;
        let stub = ctx.stub();
        stub.put_state(&record.id, &bytes).map_err(ContractError::PutState)?;
        debug!(tx_id = stub.tx_id(), id = %record.id, "record created");
        Ok(())
    }

    /// Whether any value is stored under `id`.
    pub fn record_exists(
        &self,
        ctx: &dyn TransactionContext,
        id: &str,
    ) -> Result<bool, ContractError> {
        let value = ctx.stub().get_state(id).map_err(ContractError::ReadState)?;
        Ok(value.is_some())
    }

    /// Point lookup; fails with `NotFound` when `id` is absent.
    pub fn read_record(
        &self,
        ctx: &dyn TransactionContext,
        id: &str,
    ) -> Result<VoterRecord, ContractError> {
        let bytes = ctx
            .stub()
            .get_state(id)
            .map_err(ContractError::ReadState)?
            .ok_or_else(|| ContractError::NotFound(id.to_string()))?;
        Ok(VoterRecord::from_bytes(&bytes)?)
    }

    /// Every record in the namespace, in key order.
    ///
    /// The range query is closed however the scan ends.
    pub fn list_all_records(
        &self,
        ctx: &dyn TransactionContext,
    ) -> Result<Vec<VoterRecord>, ContractError> {
        let stub = ctx.stub();
        let iter = stub.get_state_by_range("", "").map_err(ContractError::Query)?;
        let results = QueryGuard::new(iter);

        let mut records = Vec::new();
        for entry in results {
            let entry = entry.map_err(ContractError::Query)?;
            records.push(VoterRecord::from_bytes(&entry.value)?);
        }
        debug!(tx_id = stub.tx_id(), count = records.len(), "records listed");
        Ok(records)
    }
}
