use proptest::prelude::*;

use atcc_types::VoterRecord;

fn any_record() -> impl Strategy<Value = VoterRecord> {
    (
        "[a-z0-9]{1,16}",
        "\\PC{0,12}",
        "[0-9]{6}-[0-9]{4}",
        "\\PC{0,24}",
        "\\PC{0,24}",
    )
        .prop_map(|(id, candidate, cpr, name, party)| {
            VoterRecord::new(id, candidate, cpr, name, party)
        })
}

proptest! {
    /// Encoding the same record twice yields identical bytes.
    #[test]
    fn encoding_is_deterministic(record in any_record()) {
        let a = record.to_bytes().unwrap();
        let b = record.clone().to_bytes().unwrap();
        prop_assert_eq!(a, b);
    }

    /// Top-level keys always appear in canonical order.
    #[test]
    fn keys_are_emitted_in_canonical_order(record in any_record()) {
        let bytes = record.to_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let positions: Vec<usize> = [
            "\"Candidate\":",
            "\"CPR\":",
            "\"ID\":",
            "\"Name\":",
            "\"PoliticalParty\":",
        ]
        .iter()
        .map(|k| text.find(k).unwrap())
        .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(value.as_object().unwrap().len(), 5);
    }

    /// Decoding what was encoded gives back the record.
    #[test]
    fn decode_inverts_encode(record in any_record()) {
        let decoded = VoterRecord::from_bytes(&record.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(decoded, record);
    }
}
