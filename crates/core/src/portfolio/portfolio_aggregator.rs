//! Reduction of investment and vesting records into portfolio statistics.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_DECIMAL_PLACES;
use crate::errors::Result;
use crate::vesting::{vesting_progress, VestingScheduleRecord, VestingStatus};

use super::{InvestmentRecord, InvestmentStatus, PortfolioError, PortfolioSummary, TokenAllocation};

/// Reduces investment and vesting records into a [`PortfolioSummary`].
///
/// Pure and synchronous: `now` (unix seconds) and the reference token price
/// are explicit inputs, inputs are never mutated, and identical inputs
/// always produce identical summaries. `reference_token_price` values
/// unreleased vesting allocations and is denominated in the records' shared
/// currency, per token.
///
/// Empty input is a defined zero-result, not an error. Negative amounts, a
/// negative reference price, or records tagged with different currencies
/// fail fast with a [`PortfolioError`].
pub fn aggregate(
    investments: &[InvestmentRecord],
    schedules: &[VestingScheduleRecord],
    reference_token_price: Decimal,
    now: i64,
) -> Result<PortfolioSummary> {
    debug!(
        "Aggregating {} investments and {} vesting schedules",
        investments.len(),
        schedules.len()
    );

    if reference_token_price < Decimal::ZERO {
        return Err(PortfolioError::NegativeReferencePrice(reference_token_price).into());
    }
    validate_investments(investments)?;

    if investments.is_empty() && schedules.is_empty() {
        return Ok(PortfolioSummary::default());
    }

    let currency = investments
        .first()
        .map(|record| record.currency.clone())
        .unwrap_or_default();

    // Value totals. All records share one currency, checked above.
    let total_invested: Decimal = investments.iter().map(|r| r.invested_amount).sum();
    let total_tokens: Decimal = investments.iter().map(|r| r.token_amount).sum();
    let current_value: Decimal = investments.iter().map(|r| r.current_value).sum();
    let total_profit = current_value - total_invested;
    let profit_percentage = if total_invested > Decimal::ZERO {
        (total_profit / total_invested * dec!(100)).round_dp(PERCENT_DECIMAL_PLACES)
    } else {
        Decimal::ZERO
    };

    let count_status = |status: InvestmentStatus| {
        investments
            .iter()
            .filter(|record| record.status == status)
            .count()
    };
    let active_count = count_status(InvestmentStatus::Active);
    let completed_count = count_status(InvestmentStatus::Completed);
    let refunded_count = count_status(InvestmentStatus::Refunded);

    let average_roi = average_roi(investments);
    let (best_performing, worst_performing) = rank_by_performance(investments);
    let token_allocations = token_allocations(investments, current_value);

    // Vesting valuation as of `now`.
    let mut total_vesting_value = Decimal::ZERO;
    let mut releasable_value = Decimal::ZERO;
    let mut vesting_active_count = 0;
    let mut vesting_completed_count = 0;
    let mut vesting_revoked_count = 0;
    for schedule in schedules {
        let progress = vesting_progress(schedule, now)?;
        total_vesting_value += schedule.remaining_amount() * reference_token_price;
        releasable_value += progress.releasable_amount * reference_token_price;
        match progress.status {
            VestingStatus::Active => vesting_active_count += 1,
            VestingStatus::Completed => vesting_completed_count += 1,
            VestingStatus::Revoked => vesting_revoked_count += 1,
        }
    }

    Ok(PortfolioSummary {
        currency,
        total_invested,
        total_tokens,
        current_value,
        total_profit,
        profit_percentage,
        active_count,
        completed_count,
        refunded_count,
        average_roi,
        best_performing,
        worst_performing,
        token_allocations,
        total_vesting_value,
        releasable_value,
        vesting_active_count,
        vesting_completed_count,
        vesting_revoked_count,
    })
}

fn validate_investments(investments: &[InvestmentRecord]) -> Result<()> {
    let expected_currency = investments.first().map(|record| record.currency.as_str());

    for record in investments {
        for (field, amount) in [
            ("invested_amount", record.invested_amount),
            ("token_amount", record.token_amount),
            ("current_value", record.current_value),
        ] {
            if amount < Decimal::ZERO {
                return Err(PortfolioError::NegativeAmount {
                    crowdsale_id: record.crowdsale_id.clone(),
                    field,
                    amount,
                }
                .into());
            }
        }

        if let Some(expected) = expected_currency {
            if record.currency != expected {
                return Err(PortfolioError::CurrencyMismatch {
                    crowdsale_id: record.crowdsale_id.clone(),
                    expected: expected.to_string(),
                    found: record.currency.clone(),
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Mean of `profit_loss_percentage` over records with an actual
/// contribution; zero when no record has one.
fn average_roi(investments: &[InvestmentRecord]) -> Decimal {
    let positioned: Vec<&InvestmentRecord> = investments
        .iter()
        .filter(|record| record.has_position())
        .collect();
    if positioned.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = positioned
        .iter()
        .map(|record| record.profit_loss_percentage)
        .sum();
    (sum / Decimal::from(positioned.len())).round_dp(PERCENT_DECIMAL_PLACES)
}

/// Best and worst performer by `profit_loss_percentage`. The sort is
/// stable, so equal performers keep first-encountered order.
fn rank_by_performance(
    investments: &[InvestmentRecord],
) -> (Option<InvestmentRecord>, Option<InvestmentRecord>) {
    let mut ranked: Vec<&InvestmentRecord> = investments.iter().collect();
    ranked.sort_by(|a, b| b.profit_loss_percentage.cmp(&a.profit_loss_percentage));
    (
        ranked.first().map(|record| (*record).clone()),
        ranked.last().map(|record| (*record).clone()),
    )
}

/// Groups records by token symbol, summing amounts and values. The share of
/// total value is zero when the portfolio has no value at all.
fn token_allocations(
    investments: &[InvestmentRecord],
    current_value: Decimal,
) -> Vec<TokenAllocation> {
    let mut grouped: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();
    for record in investments {
        let entry = grouped
            .entry(record.token_symbol.as_str())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        entry.0 += record.token_amount;
        entry.1 += record.current_value;
    }

    let mut allocations: Vec<TokenAllocation> = grouped
        .into_iter()
        .map(|(symbol, (token_amount, value))| {
            let percentage = if current_value > Decimal::ZERO {
                (value / current_value * dec!(100)).round_dp(PERCENT_DECIMAL_PLACES)
            } else {
                Decimal::ZERO
            };
            TokenAllocation {
                token_symbol: symbol.to_string(),
                token_amount,
                value,
                percentage,
            }
        })
        .collect();

    // Sort by value descending; the grouping map keeps ties alphabetical.
    allocations.sort_by(|a, b| b.value.cmp(&a.value));
    allocations
}
