//! Application-wide constants

pub const API_PREFIX: &str = "/api/v1/menus";
pub const DEFAULT_HTTP_PORT: u16 = 8000;
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;
/// Digits after the decimal point stored for a dish price.
pub const PRICE_SCALE: i64 = 2;
/// Integer digits left by the `NUMERIC(10, 2)` price column.
pub const PRICE_INTEGER_DIGITS: u32 = 8;
/// Longest price text accepted before parsing.
pub const PRICE_INPUT_MAX_LEN: usize = 64;
/// Most fractional digits a price input may carry before rounding.
pub const PRICE_INPUT_MAX_SCALE: i64 = 32;
