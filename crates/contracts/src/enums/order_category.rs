use serde::{Deserialize, Serialize};
use std::fmt;

/// Типы заказов (фиксированный справочник кодов)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderCategory {
    #[serde(rename = "AAAA")]
    Aaaa,
    #[serde(rename = "BBBB")]
    Bbbb,
    #[serde(rename = "CCCC")]
    Cccc,
    #[serde(rename = "DDDD")]
    Dddd,
}

impl OrderCategory {
    /// Получить код типа
    pub fn code(&self) -> &'static str {
        match self {
            OrderCategory::Aaaa => "AAAA",
            OrderCategory::Bbbb => "BBBB",
            OrderCategory::Cccc => "CCCC",
            OrderCategory::Dddd => "DDDD",
        }
    }

    /// Все типы в порядке отображения
    pub fn all() -> [OrderCategory; 4] {
        [
            OrderCategory::Aaaa,
            OrderCategory::Bbbb,
            OrderCategory::Cccc,
            OrderCategory::Dddd,
        ]
    }

    /// Парсинг из кода (регистр важен)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AAAA" => Some(OrderCategory::Aaaa),
            "BBBB" => Some(OrderCategory::Bbbb),
            "CCCC" => Some(OrderCategory::Cccc),
            "DDDD" => Some(OrderCategory::Dddd),
            _ => None,
        }
    }
}

impl fmt::Display for OrderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_all() {
        for category in OrderCategory::all() {
            assert_eq!(OrderCategory::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert_eq!(OrderCategory::from_code("aaaa"), None);
        assert_eq!(OrderCategory::from_code("EEEE"), None);
        assert_eq!(OrderCategory::from_code(""), None);
    }

    #[test]
    fn test_ordering_follows_display_order() {
        let mut shuffled = vec![
            OrderCategory::Dddd,
            OrderCategory::Aaaa,
            OrderCategory::Cccc,
            OrderCategory::Bbbb,
        ];
        shuffled.sort();
        assert_eq!(shuffled, OrderCategory::all().to_vec());
    }
}
