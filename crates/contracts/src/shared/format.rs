//! Форматирование чисел и дат для отображения (локаль ru-RU)

use chrono::NaiveDate;

/// Разделитель групп разрядов в ru-RU: неразрывный пробел
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Форматирует целое число с разделителем тысяч
///
/// # Примеры
///
/// ```
/// use contracts::shared::format::format_number_int;
/// assert_eq!(format_number_int(1234567), "1\u{a0}234\u{a0}567");
/// ```
pub fn format_number_int(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 * 2);

    // Вставляем разделитель каждые 3 цифры с конца
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }

    result
}

/// Цена с разделителем тысяч и знаком валюты: `8500` -> `"8 500 ₽"`
pub fn format_price(value: u32, currency_sign: &str) -> String {
    format!("{} {}", format_number_int(u64::from(value)), currency_sign)
}

/// Разбор ISO-даты `YYYY-MM-DD` (допускается хвост времени после `T`)
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
///
/// Unparseable input is returned unchanged.
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => format_naive_date(date),
        None => date_str.to_string(),
    }
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(0), "0");
        assert_eq!(format_number_int(990), "990");
        assert_eq!(format_number_int(1200), "1\u{a0}200");
        assert_eq!(format_number_int(8500), "8\u{a0}500");
        assert_eq!(format_number_int(123456), "123\u{a0}456");
        assert_eq!(format_number_int(1234567), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(8500, "₽"), "8\u{a0}500 ₽");
        assert_eq!(format_price(990, "₽"), "990 ₽");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-11-05"), "05.11.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2024-13-40"), "2024-13-40");
        assert_eq!(parse_date(""), None);
    }
}
