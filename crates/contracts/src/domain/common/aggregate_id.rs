use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Разбор положительного целого идентификатора (0 не допускается)
pub(crate) fn parse_positive_id(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(0) => Err("Invalid id: must be positive".to_string()),
        Ok(v) => Ok(v),
        Err(e) => Err(format!("Invalid id: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id("42"), Ok(42));
        assert_eq!(parse_positive_id(" 7 "), Ok(7));
        assert!(parse_positive_id("0").is_err());
        assert!(parse_positive_id("-1").is_err());
        assert!(parse_positive_id("abc").is_err());
    }
}
