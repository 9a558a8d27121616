/// Number of entries in the dashboard's top performers list
pub const DEFAULT_TOP_PERFORMERS_LIMIT: usize = 5;

/// Currency symbol used when there is no holding to take one from
pub const DEFAULT_CURRENCY_SYMBOL: char = 'R';

/// Batch size at which derivation fans out across the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: usize = 2;

/// Characters stripped from a numeral as thousands separators
pub const GROUPING_SEPARATORS: [char; 3] = [',', ' ', '\u{00A0}'];

/// Largest magnitude the parser accepts, one quadrillion currency units
pub const MAX_MAGNITUDE: f64 = 1e15;
