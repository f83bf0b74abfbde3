use serde::{Deserialize, Serialize};

/// Сегменты каталога (верхний уровень фильтра)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Segment {
    Apparel,
    Bags,
    Footwear,
    Accessories,
}

impl Segment {
    /// Получить код сегмента (как он хранится в данных и в URL)
    pub fn code(&self) -> &'static str {
        match self {
            Segment::Apparel => "APPAREL",
            Segment::Bags => "BAGS",
            Segment::Footwear => "FOOTWEAR",
            Segment::Accessories => "ACCESSORIES",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Segment::Apparel => "Apparel",
            Segment::Bags => "Bags",
            Segment::Footwear => "Footwear",
            Segment::Accessories => "Accessories",
        }
    }

    /// Получить все сегменты
    pub fn all() -> Vec<Segment> {
        vec![
            Segment::Apparel,
            Segment::Bags,
            Segment::Footwear,
            Segment::Accessories,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "APPAREL" => Some(Segment::Apparel),
            "BAGS" => Some(Segment::Bags),
            "FOOTWEAR" => Some(Segment::Footwear),
            "ACCESSORIES" => Some(Segment::Accessories),
            _ => None,
        }
    }

    /// Парсинг без учёта регистра (данные каталога могут прийти в любом регистре)
    pub fn from_code_ignore_case(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|v| v.code().eq_ignore_ascii_case(code))
    }

    /// Фиксированный набор сегментов с разделением по полу.
    /// Решает только сегмент, а не наличие поля gender у категорий.
    pub fn supports_gender_variants(&self) -> bool {
        matches!(self, Segment::Apparel | Segment::Footwear)
    }
}

/// Поддерживает ли сегмент (по коду) разделение по полу
pub fn is_gender_capable(segment_code: &str) -> bool {
    Segment::from_code_ignore_case(segment_code).map_or(false, |s| s.supports_gender_variants())
}

/// Название сегмента для UI; неизвестные коды показываются как есть
pub fn segment_label(segment_code: &str) -> String {
    Segment::from_code_ignore_case(segment_code)
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| segment_code.to_string())
}

impl ToString for Segment {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
