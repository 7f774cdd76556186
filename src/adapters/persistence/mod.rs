mod in_memory_ledger;

pub use in_memory_ledger::InMemoryRewardLedger;
