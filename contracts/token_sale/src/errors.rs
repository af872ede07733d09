use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Null address, zero rate or amount, bad config, overflow (3) ---
    InvalidParameter = 3,

    // --- Called outside its phase (4) ---
    PhaseViolation = 4,

    // --- Not the owner, or not whitelisted during the gated period (5) ---
    AccessViolation = 5,

    // --- Sale cap (6) ---
    CapExceeded = 6,

    // --- One-shot setting already written (7) ---
    AlreadySet = 7,
}
