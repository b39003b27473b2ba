//! Paycheck withholding math
//!
//! Flat-rate withholding driven by the rates the plan's job events
//! carry. Order of operations per paycheck: the employee 401k
//! contribution comes out pre-tax, federal and state withholding apply
//! to the reduced amount, Social Security and Medicare apply to full
//! gross. The employer match never passes through the paycheck; it is
//! credited straight to the 401k envelope by the handler.

/// Withholding rates for one job, as fractions of pay.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithholdingRates {
    pub federal: f64,
    pub state: f64,
    pub social_security: f64,
    pub medicare: f64,
}

/// Breakdown of a single gross paycheck.
#[derive(Debug, Clone, Copy)]
pub struct PaycheckBreakdown {
    pub gross: f64,
    /// Employee 401k contribution, deducted pre-tax.
    pub pre_tax_401k: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub social_security_tax: f64,
    pub medicare_tax: f64,
}

impl PaycheckBreakdown {
    pub fn total_withheld(&self) -> f64 {
        self.federal_tax + self.state_tax + self.social_security_tax + self.medicare_tax
    }

    /// Take-home pay credited to the cash envelope.
    pub fn net_pay(&self) -> f64 {
        self.gross - self.pre_tax_401k - self.total_withheld()
    }
}

/// Break a gross paycheck down into withholding components.
pub fn withhold(gross: f64, rates: WithholdingRates, pre_tax_401k: f64) -> PaycheckBreakdown {
    let taxable = gross - pre_tax_401k;
    PaycheckBreakdown {
        gross,
        pre_tax_401k,
        federal_tax: taxable * rates.federal,
        state_tax: taxable * rates.state,
        social_security_tax: gross * rates.social_security,
        medicare_tax: gross * rates.medicare,
    }
}
