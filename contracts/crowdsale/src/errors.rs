use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Configuration (3–13) ---
    InvalidWindow = 3,
    InvalidRate = 4,
    InvalidCap = 5,
    InvalidGoal = 6,
    WaveLengthMismatch = 7,
    EmptyWaveTable = 8,
    WavesNotAscending = 9,
    InvalidWaveCap = 10,
    InvalidWaveBonus = 11,
    FinalWaveCapMismatch = 12,
    WaveOutOfRange = 13,

    // --- Contribution (14–16) ---
    InvalidAmount = 14,
    OutsideWindow = 15,
    CapExceeded = 16,

    // --- Finalization (17–18) ---
    AlreadyFinalized = 17,
    NotYetEnded = 18,

    // --- Collaborators (19–20) ---
    MintFailed = 19,
    ForwardFailed = 20,

    // --- Arithmetic (21) ---
    ArithmeticOverflow = 21,
}
