//! Records written by `InitLedger`.

use atcc_types::VoterRecord;

const SEED_CPR: &str = "202000-1821";

/// `(id, candidate, name, political party)` for each seeded voter.
const SEED: [(&str, &str, &str, &str); 6] = [
    ("asset1", "blue", "Tomoko", "Venstre"),
    ("asset2", "red", "Brad", "Socialdemokratiet"),
    ("asset3", "green", "Jin Soo", "Liberal alliance"),
    ("asset4", "yellow", "Max", "SF"),
    ("asset5", "black", "Adriana", "Dansk folkeparti"),
    ("asset6", "white", "Michel", "Enhedslisten"),
];

pub fn seed_records() -> Vec<VoterRecord> {
    SEED.iter()
        .map(|(id, candidate, name, party)| {
            VoterRecord::new(*id, *candidate, SEED_CPR, *name, *party)
        })
        .collect()
}
