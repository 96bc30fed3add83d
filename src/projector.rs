/*!
 * Table projection: scene records into breakdown-table rows.
 *
 * A schema is an ordered list of unique column names, either a named
 * preset or a caller-supplied custom list. Simple columns look up one
 * attribute; combined columns aggregate 2-3 attributes into one labeled,
 * multi-line cell. Projection is deterministic: an unknown preset name
 * falls back to the basic preset rather than failing.
 */

use serde::{Deserialize, Serialize};

use crate::document::SceneRecord;

/// Synopsis column length cap, in characters.
const SYNOPSIS_CHAR_LIMIT: usize = 200;

/// Named column presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPreset {
    #[default]
    Basic,
    Extended,
    Full,
}

impl SchemaPreset {
    /// Resolve a preset name; unknown names fall back to `Basic`.
    pub fn resolve(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "extended" => Self::Extended,
            "full" => Self::Full,
            "basic" => Self::Basic,
            _ => Self::Basic,
        }
    }

    /// The ordered column list of this preset.
    pub fn columns(&self) -> Vec<String> {
        let columns: &[&str] = match self {
            Self::Basic => &[
                "Серия",
                "Сцена",
                "Режим",
                "Инт / нат",
                "Объект",
                "Персонажи",
                "Реквизит",
            ],
            Self::Extended => &[
                "Серия",
                "Сцена",
                "Режим",
                "Инт / нат",
                "Объект",
                "Подобъект",
                "Персонажи",
                "Массовка",
                "Реквизит",
                "Игровой транспорт",
                "Спецэффект",
                "Спец. оборудование",
            ],
            Self::Full => &[
                "Серия",
                "Сцена",
                "Режим",
                "Инт / нат",
                "Объект",
                "Подобъект",
                "Синопсис",
                "Персонажи",
                "Массовка",
                "Реквизит",
                "Игровой транспорт",
                "Животные",
                "Каскадер / Трюк",
                "Спецэффект",
                "Спец. оборудование",
            ],
        };
        columns.iter().map(|c| c.to_string()).collect()
    }
}

impl std::fmt::Display for SchemaPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Basic => "basic",
            Self::Extended => "extended",
            Self::Full => "full",
        };
        write!(f, "{}", name)
    }
}

/// The declared combined columns: name plus `(label, attribute)` parts.
/// Attribute keys reuse the simple-column names.
const COMBINED_COLUMNS: &[(&str, &[(&str, &str)])] = &[
    ("Объект / Подобъект", &[("Объект", "Объект"), ("Подобъект", "Подобъект")]),
    ("Реквизит / Транспорт", &[("Реквизит", "Реквизит"), ("Транспорт", "Игровой транспорт")]),
    ("Эффекты / Трюки", &[("Эффекты", "Спецэффект"), ("Трюки", "Каскадер / Трюк")]),
];

/// An ordered list of unique column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl ColumnSchema {
    /// Build a schema from a preset.
    pub fn from_preset(preset: SchemaPreset) -> Self {
        Self {
            columns: preset.columns(),
        }
    }

    /// Build a custom schema from an explicit ordered column list.
    ///
    /// The series column is always present: if the caller omitted
    /// "Серия" it is forced in as the first column.
    pub fn custom(columns: Vec<String>) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(columns.len() + 1);
        for column in columns {
            if !deduped.contains(&column) {
                deduped.push(column);
            }
        }
        if !deduped.iter().any(|c| c == "Серия") {
            deduped.insert(0, "Серия".to_string());
        }
        Self { columns: deduped }
    }

    /// Resolve a schema from an optional custom list or preset name.
    pub fn resolve(preset_name: &str, custom_columns: Option<Vec<String>>) -> Self {
        match custom_columns {
            Some(columns) if !columns.is_empty() => Self::custom(columns),
            _ => Self::from_preset(SchemaPreset::resolve(preset_name)),
        }
    }

    /// The ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// One projected table row: column name -> rendered cell, schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<(String, String)>,
}

impl TableRow {
    /// Look up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

/// Table projector: applies a schema to a batch of scene records.
#[derive(Debug, Default)]
pub struct TableProjector;

impl TableProjector {
    pub fn new() -> Self {
        Self
    }

    /// Project scene records into rows, one per scene, schema order.
    pub fn project(
        &self,
        records: &[SceneRecord],
        schema: &ColumnSchema,
        series_label: Option<&str>,
    ) -> Vec<TableRow> {
        records
            .iter()
            .map(|record| self.project_row(record, schema, series_label))
            .collect()
    }

    fn project_row(
        &self,
        record: &SceneRecord,
        schema: &ColumnSchema,
        series_label: Option<&str>,
    ) -> TableRow {
        let cells = schema
            .columns()
            .iter()
            .map(|column| {
                let value = self.render_column(column, record, series_label);
                (column.clone(), value)
            })
            .collect();
        TableRow { cells }
    }

    /// Render one column for one record, combined columns first.
    fn render_column(
        &self,
        column: &str,
        record: &SceneRecord,
        series_label: Option<&str>,
    ) -> String {
        if let Some((_, parts)) = COMBINED_COLUMNS.iter().find(|(name, _)| *name == column) {
            return self.render_combined(parts, record, series_label);
        }
        self.render_simple(column, record, series_label)
    }

    /// Labeled multi-line cell; absent sub-attributes are omitted
    /// entirely, an all-absent combination yields the empty string.
    fn render_combined(
        &self,
        parts: &[(&str, &str)],
        record: &SceneRecord,
        series_label: Option<&str>,
    ) -> String {
        let rendered: Vec<String> = parts
            .iter()
            .filter_map(|(label, attribute)| {
                let value = self.render_simple(attribute, record, series_label);
                if value.is_empty() {
                    None
                } else {
                    Some(format!("{}: {}", label, value))
                }
            })
            .collect();
        rendered.join("\n")
    }

    fn render_simple(
        &self,
        column: &str,
        record: &SceneRecord,
        series_label: Option<&str>,
    ) -> String {
        let elements = &record.elements;
        match column {
            "Серия" => series_label.unwrap_or("").to_string(),
            "Сцена" => record.scene.scene_number.clone(),
            "Режим" => elements
                .time_of_day
                .map(|t| t.display_name().to_string())
                .unwrap_or_default(),
            "Инт / нат" => elements
                .setting
                .map(|s| s.display_name().to_string())
                .unwrap_or_default(),
            "Объект" => elements.location_object.clone().unwrap_or_default(),
            "Подобъект" => elements.location_sub_object.clone().unwrap_or_default(),
            "Синопсис" => record
                .scene
                .body_text
                .chars()
                .take(SYNOPSIS_CHAR_LIMIT)
                .collect(),
            "Персонажи" => elements.characters.join(", "),
            "Массовка" => elements.extras.join(", "),
            "Реквизит" => elements.props.join(", "),
            "Игровой транспорт" => elements.vehicles.join(", "),
            "Спецэффект" => elements.special_effects.join(", "),
            "Спец. оборудование" => elements.equipment.join(", "),
            "Животные" => elements.animals.join(", "),
            "Каскадер / Трюк" => elements.stunts.join(", "),
            _ => String::new(),
        }
    }
}
