use serde::{Deserialize, Serialize};

/// Пол по умолчанию, когда он не указан ни у товара, ни у категории
pub const DEFAULT_GENDER: &str = "UNISEX";

/// Варианты по полу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Mens,
    Womens,
    Unisex,
    Kids,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Mens => "MENS",
            Gender::Womens => "WOMENS",
            Gender::Unisex => "UNISEX",
            Gender::Kids => "KIDS",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Mens => "Men",
            Gender::Womens => "Women",
            Gender::Unisex => "Unisex",
            Gender::Kids => "Kids",
        }
    }

    pub fn all() -> Vec<Gender> {
        vec![Gender::Mens, Gender::Womens, Gender::Unisex, Gender::Kids]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MENS" => Some(Gender::Mens),
            "WOMENS" => Some(Gender::Womens),
            "UNISEX" => Some(Gender::Unisex),
            "KIDS" => Some(Gender::Kids),
            _ => None,
        }
    }

    /// Парсинг без учёта регистра (данные каталога могут прийти в любом регистре)
    pub fn from_code_ignore_case(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|v| v.code().eq_ignore_ascii_case(code))
    }
}

/// Название для UI; неизвестные коды показываются как есть
pub fn gender_label(gender_code: &str) -> String {
    Gender::from_code_ignore_case(gender_code)
        .map(|g| g.display_name().to_string())
        .unwrap_or_else(|| gender_code.to_string())
}

impl ToString for Gender {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gender_is_known() {
        assert_eq!(Gender::from_code(DEFAULT_GENDER), Some(Gender::Unisex));
    }

    #[test]
    fn test_gender_label() {
        assert_eq!(gender_label("WOMENS"), "Women");
        assert_eq!(gender_label("NONBINARY"), "NONBINARY");
        assert_eq!(gender_label("mens"), "Men");
    }
}
