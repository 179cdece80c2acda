/// Fee rates are expressed in basis points (1/10000).
pub const BASIS_POINTS_DIVISOR: u64 = 10_000;

/// A fee above 100% of principal is rejected.
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000;
