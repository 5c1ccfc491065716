// Copyright (c) Daftar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

/// Negative or garbage user input is treated as zero; these functions never
/// fail and never produce a negative amount.
pub fn sanitize(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}

/// Total owed for a period: amount carried over from prior months plus the
/// amount billed this month.
pub fn total_owed(prior: Decimal, current: Decimal) -> Decimal {
    sanitize(prior) + sanitize(current)
}

/// Total paid across the three payment channels.
pub fn paid_total(cash: Decimal, wire: Decimal, card: Decimal) -> Decimal {
    sanitize(cash) + sanitize(wire) + sanitize(card)
}

/// Net position after payments: either money still owed or an overpayment
/// carried forward as credit. At most one side is nonzero; a fully settled
/// account has both at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Residual {
    pub debt: Decimal,
    pub advance: Decimal,
}

pub fn residual(total_owed: Decimal, paid_total: Decimal) -> Residual {
    let difference = total_owed - paid_total;
    if difference >= Decimal::ZERO {
        Residual {
            debt: difference,
            advance: Decimal::ZERO,
        }
    } else {
        Residual {
            debt: Decimal::ZERO,
            advance: -difference,
        }
    }
}
