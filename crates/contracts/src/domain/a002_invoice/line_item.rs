//! Строки счёта.
//!
//! Строки хранятся в явной упорядоченной коллекции со стабильными
//! идентификаторами: добавление дописывает строку в конец, удаление идёт
//! по идентификатору. Отрисованный список всегда выводится из коллекции.

use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Позиция каталога услуг
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CatalogItem {
    #[default]
    #[serde(rename = "App Design")]
    AppDesign,
    #[serde(rename = "App Customization")]
    AppCustomization,
    #[serde(rename = "ABC Template")]
    AbcTemplate,
    #[serde(rename = "App Development")]
    AppDevelopment,
}

impl CatalogItem {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogItem::AppDesign => "App Design",
            CatalogItem::AppCustomization => "App Customization",
            CatalogItem::AbcTemplate => "ABC Template",
            CatalogItem::AppDevelopment => "App Development",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|item| item.as_str() == s)
    }

    pub fn all() -> [CatalogItem; 4] {
        [
            CatalogItem::AppDesign,
            CatalogItem::AppCustomization,
            CatalogItem::AbcTemplate,
            CatalogItem::AppDevelopment,
        ]
    }
}

impl std::fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Стабильный идентификатор строки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(pub Uuid);

impl LineItemId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for LineItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(LineItemId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

pub const DEFAULT_DESCRIPTION: &str = "Customization & Bug Fixes";
pub const DEFAULT_UNIT_COST: f64 = 24.0;
pub const DEFAULT_HOURS: f64 = 1.0;

/// Верхняя граница для вводимых сумм, часов и ставок; произведения остаются конечными
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Разобрать сумму из поля ввода; отрицательные и нечисловые значения дают 0
pub fn parse_amount(input: &str) -> f64 {
    clamp_amount(input.trim().parse::<f64>().unwrap_or(0.0))
}

pub(crate) fn clamp_amount(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        0.0
    } else {
        value.min(MAX_AMOUNT)
    }
}

/// Одна оплачиваемая строка счёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: LineItemId,
    pub item: CatalogItem,
    pub description: String,
    unit_cost: f64,
    hours: f64,
}

impl LineItem {
    /// Строка со значениями по умолчанию
    pub fn new_default() -> Self {
        Self {
            id: LineItemId::new_v4(),
            item: CatalogItem::default(),
            description: DEFAULT_DESCRIPTION.to_string(),
            unit_cost: DEFAULT_UNIT_COST,
            hours: DEFAULT_HOURS,
        }
    }

    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn set_unit_cost(&mut self, value: f64) {
        self.unit_cost = clamp_amount(value);
    }

    pub fn set_hours(&mut self, value: f64) {
        self.hours = clamp_amount(value);
    }

    /// price = unitCost × hours
    pub fn price(&self) -> f64 {
        self.unit_cost * self.hours
    }
}

/// Упорядоченная коллекция строк счёта
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItems {
    items: Vec<LineItem>,
}

impl LineItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Начальное состояние формы: одна строка по умолчанию
    pub fn with_default_row() -> Self {
        Self {
            items: vec![LineItem::new_default()],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<LineItemId> {
        self.items.iter().map(|i| i.id).collect()
    }

    pub fn get(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Добавить строку по умолчанию в конец, вернуть её идентификатор
    pub fn add(&mut self) -> LineItemId {
        let item = LineItem::new_default();
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Удалить строку по идентификатору
    pub fn remove(&mut self, id: LineItemId) -> Option<LineItem> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Изменить строку; `false`, если строки уже нет
    pub fn update(&mut self, id: LineItemId, f: impl FnOnce(&mut LineItem)) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Сумма цен всех строк
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::price).sum()
    }
}
