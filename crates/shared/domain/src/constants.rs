//! Canonical string identifiers and numeric limits shared across the flow.

/// Event identifiers as they appear on the wire and in the catalog.
pub const PAPER_PRESENTATION: &str = "paper-presentation";
pub const BINARY_BATTLE: &str = "binary-battle";
pub const PROMPT_ARENA: &str = "prompt-arena";
pub const CONNECTION: &str = "connection";
pub const FLIPFLOP: &str = "flipflop";

/// Maximum technical-event registrations per EPOCH ID.
pub const MAX_TECHNICAL_EVENTS: u32 = 2;

/// Maximum non-technical-event registrations per EPOCH ID.
pub const MAX_NON_TECHNICAL_EVENTS: u32 = 1;

/// Length of a well-formed EPOCH ID (`EPOCH` + 3 digits).
pub const EPOCH_ID_LEN: usize = 8;

/// Required length of a participant mobile number.
pub const MOBILE_LEN: usize = 10;
