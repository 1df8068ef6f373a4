//! Name-based invocation: the surface the host drives.
//!
//! Functions are called by name with string arguments. Successful calls
//! return status 200 with a JSON payload (empty for pure writes); failures
//! return status 500 carrying the error message.

use serde::Serialize;
use tracing::{debug, warn};

use atcc_store::TransactionContext;
use atcc_types::VoterRecord;

use crate::metadata::ChaincodeMetadata;
use crate::{ContractError, VoterRegistry};

/// A transaction exposed by the chaincode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transaction {
    InitLedger,
    CreateRecord,
    RecordExists,
    ReadRecord,
    ListAllRecords,
    GetMetadata,
}

impl Transaction {
    /// Contract transactions, excluding the system metadata call.
    pub const CONTRACT: [Transaction; 5] = [
        Transaction::InitLedger,
        Transaction::CreateRecord,
        Transaction::RecordExists,
        Transaction::ReadRecord,
        Transaction::ListAllRecords,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::InitLedger => "InitLedger",
            Self::CreateRecord => "CreateRecord",
            Self::RecordExists => "RecordExists",
            Self::ReadRecord => "ReadRecord",
            Self::ListAllRecords => "ListAllRecords",
            Self::GetMetadata => "org.hyperledger.fabric:GetMetadata",
        }
    }

    /// Name used by clients written against the record's old "Vote" label.
    pub fn legacy_name(self) -> Option<&'static str> {
        match self {
            Self::CreateRecord => Some("CreateVote"),
            Self::RecordExists => Some("VoteExists"),
            Self::ReadRecord => Some("ReadVote"),
            Self::ListAllRecords => Some("GetAllVotes"),
            Self::InitLedger | Self::GetMetadata => None,
        }
    }

    pub fn parameters(self) -> &'static [&'static str] {
        match self {
            Self::CreateRecord => &["id", "candidate", "cpr", "name", "politicalParty"],
            Self::RecordExists | Self::ReadRecord => &["id"],
            Self::InitLedger | Self::ListAllRecords | Self::GetMetadata => &[],
        }
    }

    /// Whether the transaction writes to world state.
    pub fn is_submit(self) -> bool {
        matches!(self, Self::InitLedger | Self::CreateRecord)
    }

    pub fn resolve(function: &str) -> Option<Self> {
        Self::CONTRACT
            .into_iter()
            .chain(std::iter::once(Self::GetMetadata))
            .find(|tx| tx.name() == function || tx.legacy_name() == Some(function))
    }

    fn check_arity(self, args: &[String]) -> Result<(), ContractError> {
        let expected = self.parameters().len();
        if args.len() != expected {
            return Err(ContractError::Arguments {
                function: self.name(),
                expected,
                got: args.len(),
            });
        }
        Ok(())
    }
}

/// Status code for a successful invocation.
pub const OK: u16 = 200;
/// Status code for a failed invocation.
pub const ERROR: u16 = 500;

/// Outcome of one invocation, as returned to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Response {
    pub status: u16,
    pub message: String,
    pub payload: Vec<u8>,
}

impl Response {
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status < 400
    }
}

/// The installable chaincode: a named [`VoterRegistry`] behind the
/// name-based invocation surface.
#[derive(Clone, Debug)]
pub struct Chaincode {
    name: String,
    contract: VoterRegistry,
}

impl Chaincode {
    pub const DEFAULT_NAME: &'static str = "VoterRegistry";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contract: VoterRegistry,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> ChaincodeMetadata {
        ChaincodeMetadata::describe(&self.name)
    }

    /// Run `function` and fold the outcome into a [`Response`].
    pub fn invoke(
        &self,
        ctx: &dyn TransactionContext,
        function: &str,
        args: &[String],
    ) -> Response {
        match self.call(ctx, function, args) {
            Ok(payload) => Response::success(payload),
            Err(e) => {
                warn!(tx_id = ctx.stub().tx_id(), function, error = %e, "invocation failed");
                Response::error(e.to_string())
            }
        }
    }

    /// Run `function` and return its JSON payload.
    pub fn call(
        &self,
        ctx: &dyn TransactionContext,
        function: &str,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let tx = Transaction::resolve(function).ok_or_else(|| ContractError::UnknownFunction {
            function: function.to_string(),
            contract: self.name.clone(),
        })?;
        tx.check_arity(args)?;
        debug!(tx_id = ctx.stub().tx_id(), function = tx.name(), "invoking");

        match tx {
            Transaction::InitLedger => {
                self.contract.init_ledger(ctx)?;
                Ok(Vec::new())
            }
            Transaction::CreateRecord => {
                let record = VoterRecord::new(
                    args[0].as_str(),
                    args[1].as_str(),
                    args[2].as_str(),
                    args[3].as_str(),
                    args[4].as_str(),
                );
                self.contract.create_record(ctx, record)?;
                Ok(Vec::new())
            }
            Transaction::RecordExists => to_payload(&self.contract.record_exists(ctx, &args[0])?),
            Transaction::ReadRecord => to_payload(&self.contract.read_record(ctx, &args[0])?),
            Transaction::ListAllRecords => to_payload(&self.contract.list_all_records(ctx)?),
            Transaction::GetMetadata => to_payload(&self.metadata()),
        }
    }
}

impl Default for Chaincode {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

fn to_payload<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, ContractError> {
    serde_json::to_vec(value).map_err(|e| ContractError::Response(e.to_string()))
}
