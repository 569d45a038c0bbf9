use rust_decimal::Decimal;

use super::reliefparameters::ReliefParameters;
use crate::form::formdata::FormData;

/// `((costs × working days) ÷ days divisor − remote allowance) × relief rate`,
/// floored at zero. Nothing is due unless the form says the person worked
/// from home; unanswered amounts count as zero.
pub fn calculate_relief(form: &FormData, parameters: &ReliefParameters) -> Decimal {
    if form.worked_from_home != Some(true) || parameters.days_divisor == 0 {
        return Decimal::ZERO;
    }

    let costs = form.household_costs().total();
    let working_days = Decimal::from(form.working_days.unwrap_or(0));
    let remote_allowance = form.remote_allowance.unwrap_or_default();

    let apportioned = costs * working_days / Decimal::from(parameters.days_divisor);
    let relief = (apportioned - remote_allowance) * parameters.relief_rate;
    relief.max(Decimal::ZERO)
}
