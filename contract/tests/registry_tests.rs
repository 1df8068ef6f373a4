//! End-to-end behaviour of the voter registry against the nullable stub.

use atcc_contract::{seed_records, Chaincode, ContractError, VoterRegistry};
use atcc_nullables::NullStub;
use atcc_types::VoterRecord;

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

#[test]
fn init_ledger_then_list_returns_exactly_the_seed() {
    let stub = NullStub::new();
    VoterRegistry.init_ledger(&stub).unwrap();

    let records = VoterRegistry.list_all_records(&stub).unwrap();
    let expected = vec![
        VoterRecord::new("asset1", "blue", "202000-1821", "Tomoko", "Venstre"),
        VoterRecord::new("asset2", "red", "202000-1821", "Brad", "Socialdemokratiet"),
        VoterRecord::new("asset3", "green", "202000-1821", "Jin Soo", "Liberal alliance"),
        VoterRecord::new("asset4", "yellow", "202000-1821", "Max", "SF"),
        VoterRecord::new("asset5", "black", "202000-1821", "Adriana", "Dansk folkeparti"),
        VoterRecord::new("asset6", "white", "202000-1821", "Michel", "Enhedslisten"),
    ];
    assert_eq!(records, expected);
    assert_eq!(seed_records(), expected);
}

#[test]
fn init_ledger_overwrites_unconditionally() {
    let stub = NullStub::new();
    stub.insert_raw("asset3", b"stale".to_vec());
    VoterRegistry.init_ledger(&stub).unwrap();
    let record = VoterRegistry.read_record(&stub, "asset3").unwrap();
    assert_eq!(record.name, "Jin Soo");
}

#[test]
fn init_ledger_stops_at_first_put_failure() {
    let stub = NullStub::new();
    stub.fail_puts_after(2);
    let err = VoterRegistry.init_ledger(&stub).unwrap_err();
    assert!(matches!(err, ContractError::PutState(_)));
    assert!(err.to_string().starts_with("failed to put to world state"));
    // No local rollback: the two accepted writes stay for the host to judge.
    assert_eq!(stub.len(), 2);
}

#[test]
fn seeded_values_are_canonical_json() {
    let stub = NullStub::new();
    VoterRegistry.init_ledger(&stub).unwrap();
    assert_eq!(
        stub.raw("asset4").unwrap(),
        br#"{"Candidate":"yellow","CPR":"202000-1821","ID":"asset4","Name":"Max","PoliticalParty":"SF"}"#.to_vec()
    );
}

// ---------------------------------------------------------------------------
// Creation and existence
// ---------------------------------------------------------------------------

#[test]
fn created_record_exists_afterwards() {
    let stub = NullStub::new();
    let record = VoterRecord::new("voter-17", "green", "121212-1212", "Karen", "SF");
    VoterRegistry.create_record(&stub, record).unwrap();
    assert!(VoterRegistry.record_exists(&stub, "voter-17").unwrap());
}

#[test]
fn creating_a_seeded_id_is_a_duplicate() {
    let stub = NullStub::new();
    VoterRegistry.init_ledger(&stub).unwrap();
    let before = stub.raw("asset2").unwrap();

    let err = VoterRegistry
        .create_record(&stub, VoterRecord::new("asset2", "x", "y", "z", "w"))
        .unwrap_err();

    assert!(err.is_duplicate());
    assert_eq!(stub.raw("asset2").unwrap(), before);
}

#[test]
fn unknown_id_does_not_exist() {
    let stub = NullStub::new();
    VoterRegistry.init_ledger(&stub).unwrap();
    assert!(!VoterRegistry.record_exists(&stub, "asset7").unwrap());
}

#[test]
fn empty_id_is_rejected_by_the_stub() {
    let stub = NullStub::new();
    let err = VoterRegistry
        .create_record(&stub, VoterRecord::new("", "a", "b", "c", "d"))
        .unwrap_err();
    assert!(matches!(err, ContractError::ReadState(_)));
    assert!(stub.is_empty());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[test]
fn listing_an_empty_keyspace_is_not_an_error() {
    let stub = NullStub::new();
    assert_eq!(VoterRegistry.list_all_records(&stub).unwrap(), Vec::new());
}

#[test]
fn corrupt_value_aborts_listing_and_closes_iterator() {
    let stub = NullStub::new();
    VoterRegistry.init_ledger(&stub).unwrap();
    stub.insert_raw("asset3", b"{not json".to_vec());

    let err = VoterRegistry.list_all_records(&stub).unwrap_err();
    assert!(matches!(err, ContractError::Codec(_)));
    assert_eq!(stub.opened_iterators(), 1);
    assert_eq!(stub.closed_iterators(), 1);
}

#[test]
fn iteration_failure_aborts_listing_and_closes_iterator() {
    let stub = NullStub::new();
    VoterRegistry.init_ledger(&stub).unwrap();
    stub.fail_iteration_at(4);

    let err = VoterRegistry.list_all_records(&stub).unwrap_err();
    assert!(matches!(err, ContractError::Query(_)));
    assert_eq!(stub.closed_iterators(), 1);
}

#[test]
fn failing_to_open_the_query_is_reported() {
    let stub = NullStub::new();
    stub.fail_range(true);
    let err = VoterRegistry.list_all_records(&stub).unwrap_err();
    assert!(matches!(err, ContractError::Query(_)));
    assert_eq!(stub.opened_iterators(), 0);
}

// ---------------------------------------------------------------------------
// Name-based invocation
// ---------------------------------------------------------------------------

#[test]
fn invocation_surface_drives_the_full_lifecycle() {
    let stub = NullStub::new();
    let cc = Chaincode::default();

    assert!(cc.invoke(&stub, "InitLedger", &[]).is_ok());

    let listed = cc.invoke(&stub, "ListAllRecords", &[]);
    let records: Vec<VoterRecord> = serde_json::from_slice(&listed.payload).unwrap();
    assert_eq!(records.len(), 6);

    let dup = cc.invoke(
        &stub,
        "CreateRecord",
        &["asset1", "blue", "202000-1821", "Tomoko", "Venstre"].map(String::from),
    );
    assert!(!dup.is_ok());
    assert_eq!(dup.message, "the record asset1 already exists");

    let meta = cc.invoke(&stub, "org.hyperledger.fabric:GetMetadata", &[]);
    let meta: serde_json::Value = serde_json::from_slice(&meta.payload).unwrap();
    assert_eq!(meta["contract"], "VoterRegistry");
}
