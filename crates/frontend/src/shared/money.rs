//! Форматирование сумм счёта

/// Денежное значение: `$1,234.50`
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, decimal_part)
}

/// Процент без лишних нулей: `21%`, `7.5%`
pub fn format_percent(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}
