use crate::prelude::*;

/// Protocol fee: `floor(total_amount * FEE_BPS / BPS_DENOMINATOR)`.
///
/// Split into quotient and remainder so the intermediate product never
/// exceeds 256 bits.
pub fn calculate_fee(total_amount: U256) -> U256 {
    let denominator = U256::from(BPS_DENOMINATOR);
    let bps = U256::from(FEE_BPS);
    let quotient = total_amount / denominator;
    let remainder = total_amount % denominator;
    quotient * bps + remainder * bps / denominator
}

/// Sums the valid recipients only; invalid entries never contribute.
pub fn calculate_totals<'a>(recipients: impl IntoIterator<Item = &'a Recipient>) -> PaymentSummary {
    let (total_amount, recipient_count) = recipients
        .into_iter()
        .filter(|r| r.is_valid())
        .fold((U256::zero(), 0usize), |(sum, count), r| {
            (sum.saturating_add(r.amount_wei()), count + 1)
        });
    let fee = calculate_fee(total_amount);
    PaymentSummary::builder()
        .total_amount(total_amount)
        .fee(fee)
        .total_required(total_amount.saturating_add(fee))
        .recipient_count(recipient_count)
        .build()
}
