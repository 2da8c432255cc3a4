/// Quantity after an increment or decrement click; one is the floor,
/// removal is a separate control.
pub fn next_quantity(current: i32, delta: i32) -> i32 {
    (current + delta).max(1)
}

/// Checkout needs somewhere to ship to; everything else about the
/// address is the backend's problem.
pub fn validate_address(address: &str) -> bool {
    !address.trim().is_empty()
}
