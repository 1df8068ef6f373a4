//! Self-description returned by the system metadata call.

use serde::Serialize;

use crate::Transaction;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChaincodeMetadata {
    pub contract: String,
    pub transactions: Vec<TransactionMetadata>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub parameters: Vec<String>,
    /// `submit` for writers, `evaluate` for read-only calls.
    pub tag: String,
}

impl ChaincodeMetadata {
    pub fn describe(contract: &str) -> Self {
        let transactions = Transaction::CONTRACT
            .into_iter()
            .map(|tx| TransactionMetadata {
                name: tx.name().to_string(),
                aliases: tx.legacy_name().map(str::to_string).into_iter().collect(),
                parameters: tx.parameters().iter().map(|p| p.to_string()).collect(),
                tag: if tx.is_submit() { "submit" } else { "evaluate" }.to_string(),
            })
            .collect();
        Self {
            contract: contract.to_string(),
            transactions,
        }
    }

    pub fn transaction(&self, name: &str) -> Option<&TransactionMetadata> {
        self.transactions
            .iter()
            .find(|t| t.name == name || t.aliases.iter().any(|a| a == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_contract_transaction() {
        let meta = ChaincodeMetadata::describe("atcc");
        assert_eq!(meta.contract, "atcc");
        assert_eq!(meta.transactions.len(), Transaction::CONTRACT.len());
        let create = meta.transaction("CreateVote").unwrap();
        assert_eq!(create.name, "CreateRecord");
        assert_eq!(create.parameters.len(), 5);
        assert_eq!(create.tag, "submit");
        assert_eq!(meta.transaction("GetAllVotes").unwrap().tag, "evaluate");
    }
}
