use rust_decimal::Decimal;
use std::ops::Mul;

use crate::fraction::Fraction;

/// Applies the platform fee and the routing budget as independent,
/// multiplicative deductions.
pub struct DeductionCalculator {
    fee: Fraction,
    routing_budget: Fraction,
}

impl DeductionCalculator {
    pub fn new(fee: Fraction, routing_budget: Fraction) -> Self {
        Self {
            fee,
            routing_budget,
        }
    }

    pub fn decrease_by_fee<T: Mul<Decimal>>(&self, amount: T) -> <T as Mul<Decimal>>::Output {
        amount * self.fee.complement()
    }

    pub fn decrease_by_routing_budget<T: Mul<Decimal>>(
        &self,
        amount: T,
    ) -> <T as Mul<Decimal>>::Output {
        amount * self.routing_budget.complement()
    }

    pub fn decrease_by_all<T: Mul<Decimal, Output = T>>(&self, amount: T) -> T {
        self.decrease_by_routing_budget(self.decrease_by_fee(amount))
    }

    /// Share of the amount removed by [`Self::decrease_by_all`].
    pub fn combined_deduction(&self) -> Decimal {
        Decimal::ONE - self.fee.complement() * self.routing_budget.complement()
    }
}
