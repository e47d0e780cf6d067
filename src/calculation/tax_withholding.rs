//! Tax withholding calculation for individual (PF) service providers.
//!
//! When an advance pays an individual for services, the suprido must withhold
//! INSS and ISS from the gross value and remit them separately. This module
//! computes that split.
//!
//! The employee-side INSS base is capped at the configured annual ceiling
//! (`min(gross, inss_ceiling)`); the capped rule is applied everywhere the
//! engine computes this tax. ISS and the employer-side (patronal) INSS use
//! the uncapped gross.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxRates;
use crate::error::{EngineError, EngineResult};

use super::round2;

/// The withholding split for one gross service value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxWithholding {
    /// Gross value of the service.
    pub gross_value: Decimal,
    /// Employee-side INSS withheld from the gross.
    pub inss_retained: Decimal,
    /// Municipal ISS withheld from the gross.
    pub iss_retained: Decimal,
    /// Amount actually paid to the provider.
    pub net_value: Decimal,
    /// Employer-side INSS owed by the court. Informational only; never
    /// deducted from the net.
    pub inss_patronal: Decimal,
}

/// Computes the withholding split for a gross service value.
///
/// Each figure is rounded half-up to cents at the step it is produced:
///
/// - `inss_retained = round2(min(gross, ceiling) * inss_rate)`
/// - `iss_retained = round2(gross * iss_rate)`
/// - `net_value = round2(gross - inss_retained - iss_retained)`
/// - `inss_patronal = round2(gross * patronal_rate)`
///
/// # Arguments
///
/// * `gross_value` - The gross value of the service, must be >= 0
/// * `iss_rate` - Optional municipal ISS rate override; the configured
///   default applies when `None`
/// * `rates` - The fiscal year's tax rates
///
/// # Errors
///
/// Returns `InvalidInput` when `gross_value` or the ISS override is negative.
///
/// # Examples
///
/// ```
/// use suprimento_engine::calculation::calculate_withholding;
/// use suprimento_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/sosfu").unwrap();
/// let rates = loader.tax_rates(2025).unwrap();
/// let w = calculate_withholding(Decimal::new(1000_00, 2), None, rates).unwrap();
/// assert_eq!(w.inss_retained, Decimal::new(110_00, 2));
/// assert_eq!(w.iss_retained, Decimal::new(50_00, 2));
/// assert_eq!(w.net_value, Decimal::new(840_00, 2));
/// assert_eq!(w.inss_patronal, Decimal::new(200_00, 2));
/// ```
pub fn calculate_withholding(
    gross_value: Decimal,
    iss_rate: Option<Decimal>,
    rates: &TaxRates,
) -> EngineResult<TaxWithholding> {
    if gross_value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "gross_value".to_string(),
            message: "must not be negative".to_string(),
        });
    }

    let iss_rate = iss_rate.unwrap_or(rates.iss_rate);
    if iss_rate < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "iss_rate".to_string(),
            message: "must not be negative".to_string(),
        });
    }

    let inss_base = gross_value.min(rates.inss_ceiling);
    let inss_retained = round2(inss_base * rates.inss_rate);
    let iss_retained = round2(gross_value * iss_rate);
    let net_value = round2(gross_value - inss_retained - iss_retained);
    let inss_patronal = round2(gross_value * rates.inss_patronal_rate);

    Ok(TaxWithholding {
        gross_value,
        inss_retained,
        iss_retained,
        net_value,
        inss_patronal,
    })
}
