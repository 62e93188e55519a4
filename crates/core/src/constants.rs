/// Sentinel shown when a display field has no resolvable value
pub const FIELD_PLACEHOLDER: &str = "-";

/// Message shown when the profile read fails
pub const PROFILE_FETCH_ERROR: &str = "Failed to fetch Account Holder data";

/// Message shown when the payment instruments read fails
pub const INSTRUMENTS_FETCH_ERROR: &str = "Failed to fetch payment instruments";

/// Message shown when the transactions read fails
pub const TRANSACTIONS_FETCH_ERROR: &str = "Failed to fetch transactions";

/// Message shown when the activate action fails
pub const ACTIVATE_ERROR: &str = "Failed to activate Account Holder";

/// Message shown when the suspend action fails
pub const SUSPEND_ERROR: &str = "Failed to suspend Account Holder";

/// Empty state for the payment instruments section
pub const INSTRUMENTS_EMPTY: &str = "No payment instruments found for this account holder.";

/// Empty state for the transactions panel
pub const TRANSACTIONS_EMPTY: &str = "No transactions found for this account holder.";

/// Empty state for the card list when only bank accounts exist
pub const NO_CARDS: &str = "No cards attached to this account.";

/// Actions declared on card rows; not wired to any operation
pub const CARD_ACTIONS: [&str; 2] = ["review", "disable"];
