use super::line_item::{clamp_amount, LineItems};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TAX_RATE: f64 = 21.0;

/// Скидка (сумма) и ставка налога (процент), вводимые в форме
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsAdjustments {
    discount: f64,
    tax_rate: f64,
}

impl Default for TotalsAdjustments {
    fn default() -> Self {
        Self {
            discount: 0.0,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl TotalsAdjustments {
    pub fn new(discount: f64, tax_rate: f64) -> Self {
        Self {
            discount: clamp_amount(discount),
            tax_rate: clamp_amount(tax_rate),
        }
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn set_discount(&mut self, value: f64) {
        self.discount = clamp_amount(value);
    }

    pub fn set_tax_rate(&mut self, value: f64) {
        self.tax_rate = clamp_amount(value);
    }
}

/// Итоги счёта, вычисленные по строкам
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub subtotal: f64,
    /// Фактически применённая скидка (не больше subtotal)
    pub discount: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
}

impl InvoiceTotals {
    pub fn compute(items: &LineItems, adjustments: &TotalsAdjustments) -> Self {
        let subtotal = round_cents(items.subtotal());
        let discount = round_cents(adjustments.discount().min(subtotal));
        let taxable = subtotal - discount;
        let tax = round_cents(taxable * adjustments.tax_rate() / 100.0);
        Self {
            subtotal,
            discount,
            tax_rate: adjustments.tax_rate(),
            tax,
            total: round_cents(taxable + tax),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
