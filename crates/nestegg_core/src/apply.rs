//! Operation handlers
//!
//! Applies one scheduled operation to the ledger. Each handler is a
//! pure function of (ledger, effective parameters): one or more
//! credit/debit/transfer calls, all landing within the operation's
//! day. Composite handlers (a financed car purchase) perform their
//! several ledger moves atomically here; the payment schedule itself
//! was already expanded by the scheduler.

use crate::catalog::EventKind;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::params::ResolvedParams;
use crate::schedule::{Action, Operation};
use crate::withholding::{WithholdingRates, withhold};

/// Apply one operation to the ledger.
pub fn apply_operation(ledger: &mut Ledger, op: &Operation) -> Result<()> {
    match &op.action {
        Action::Fire { kind, params } => fire(ledger, *kind, params, op.day),
        Action::LoanPayment {
            from,
            loan,
            payment,
            monthly_rate,
        } => loan_payment(ledger, op.event_id, from, loan, *payment, *monthly_rate),
    }
}

fn fire(ledger: &mut Ledger, kind: EventKind, params: &ResolvedParams, day: i64) -> Result<()> {
    let event_id = params.event_id();
    match kind {
        EventKind::Purchase | EventKind::HaveKid => {
            let from = ledger.resolve(event_id, params.text("from_key")?)?;
            ledger.debit(from, params.number("amount")?);
        }

        EventKind::GetJob => {
            let frequency = params.number("frequency_days")?;
            let gross = params.number("salary")? * frequency / 365.0;
            paycheck(ledger, params, gross, true)?;
        }

        EventKind::GetWageJob => {
            let frequency = params.number("frequency_days")?;
            let gross =
                params.number("hourly_wage")? * params.number("hours_per_week")? * frequency / 7.0;
            paycheck(ledger, params, gross, false)?;
        }

        EventKind::Retirement
        | EventKind::RothIraContribution
        | EventKind::TransferMoney => {
            let from = ledger.resolve(event_id, params.text("from_key")?)?;
            let to = ledger.resolve(event_id, params.text("to_key")?)?;
            let amount = params.number("amount")?;
            ledger.debit(from, amount);
            ledger.credit(to, amount);
        }

        EventKind::BuyCar | EventKind::BuyHouse => {
            let (asset_param, loan_param) = match kind {
                EventKind::BuyCar => ("car_envelope", "car_loan_envelope"),
                _ => ("house_envelope", "house_loan_envelope"),
            };
            let from = ledger.resolve(event_id, params.text("from_key")?)?;
            let asset = ledger.resolve(event_id, params.text(asset_param)?)?;
            let price = params.number("amount")?;
            let down_payment = params.number("down_payment")?;

            // The asset and its loan live in separate envelopes and are
            // never netted during simulation
            ledger.debit(from, down_payment);
            ledger.credit(asset, price);

            let principal = price - down_payment;
            if principal > 0.0 {
                let loan = ledger.resolve(event_id, params.text(loan_param)?)?;
                ledger.debit(loan, principal);
            }
        }

        EventKind::DeclareAccounts => {
            let account = ledger.resolve(event_id, params.text("account_key")?)?;
            ledger.set_balance(account, params.number("amount")?, day);
        }
    }
    Ok(())
}

/// Credit one paycheck: net to the cash envelope, 401k contribution
/// plus employer match to the retirement envelope.
fn paycheck(
    ledger: &mut Ledger,
    params: &ResolvedParams,
    gross: f64,
    with_401k: bool,
) -> Result<()> {
    let event_id = params.event_id();
    let rates = WithholdingRates {
        federal: params.number_or("federal_rate", 0.0),
        state: params.number_or("state_rate", 0.0),
        social_security: params.number_or("social_security_rate", 0.0),
        medicare: params.number_or("medicare_rate", 0.0),
    };

    let contribution = if with_401k {
        gross * params.number_or("p_401k_rate", 0.0)
    } else {
        0.0
    };

    let check = withhold(gross, rates, contribution);

    let to = ledger.resolve(event_id, params.text("to_key")?)?;
    ledger.credit(to, check.net_pay());

    if contribution > 0.0 {
        let p401k = ledger.resolve(event_id, params.text("p_401k_key")?)?;
        let employer_match = contribution * params.number_or("match_rate", 0.0);
        ledger.credit(p401k, contribution + employer_match);
    }
    Ok(())
}

/// One amortized installment: interest on the outstanding balance at
/// the monthly rate, remainder to principal, clamped so the final
/// payment brings the loan to exactly zero.
fn loan_payment(
    ledger: &mut Ledger,
    event_id: u32,
    from: &str,
    loan: &str,
    payment: f64,
    monthly_rate: f64,
) -> Result<()> {
    let loan_id = ledger.resolve(event_id, loan)?;
    let outstanding = -ledger.balance(loan_id);
    if outstanding <= 0.0 {
        return Ok(()); // already paid off
    }

    let interest = outstanding * monthly_rate;
    // Settle in full once the scheduled principal portion comes within
    // half a cent of the balance, so the final payment lands the loan
    // on exactly zero instead of a floating-point residue
    let principal = if payment - interest >= outstanding - 0.005 {
        outstanding
    } else {
        (payment - interest).max(0.0)
    };

    let from_id = ledger.resolve(event_id, from)?;
    ledger.debit(from_id, principal + interest);
    ledger.credit(loan_id, principal);
    Ok(())
}
