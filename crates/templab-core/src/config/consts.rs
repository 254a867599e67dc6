//! Constants shared across the engine

/// Indentation arithmetic defaults
pub mod indent {
    /// Column width of a tab when no width is configured
    pub const DEFAULT_TAB_WIDTH: usize = 4;
}

/// Default scalar formatting
pub mod scalar {
    /// Decimal places used by `F`, `N` and `P` when the specifier omits them
    pub const DEFAULT_PRECISION: usize = 2;

    /// Invariant date pattern (month/day/year)
    pub const INVARIANT_DATE_FORMAT: &str = "%m/%d/%Y";

    /// Invariant date-time pattern
    pub const INVARIANT_DATETIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";
}

/// Placeholder tokens
pub mod token {
    /// Length of a minted token (hyphenated UUID)
    pub const TOKEN_LEN: usize = 36;
}
