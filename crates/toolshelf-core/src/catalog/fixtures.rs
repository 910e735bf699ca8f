//! Small fixture catalog shared by unit tests

use std::sync::Arc;

use super::{CatalogDefinition, CatalogRegistry};
use crate::logging::{NoOpLogger, SharedLogger};
use crate::types::{CategoryRecord, ToolRecord};

pub fn definition() -> CatalogDefinition {
    CatalogDefinition::new(
        vec![
            CategoryRecord::new("calculators", "Calculators", "Handy Calculators").with_icon("Calculator"),
            CategoryRecord::new("converters", "Converters", "Unit Converters").with_icon("ArrowLeftRight"),
            CategoryRecord::new("text-tools", "Text Tools", "Text Tools").with_icon("Type"),
        ],
        vec![
            ToolRecord::new(
                "percentage-calculator",
                "Percentage Calculator",
                "Work out percentages and percentage change",
                "calculators",
            )
            .with_icon("Percent")
            .with_tags(["math", "percent"])
            .with_path("/calc/percent"),
            ToolRecord::new("bmi-calculator", "BMI Calculator", "Body mass index from height and weight", "calculators")
                .with_icon("Heart")
                .with_tags(["health", "bmi"]),
            ToolRecord::new("word-counter", "Word Counter", "Count words and characters", "text-tools")
                .with_icon("FileText")
                .with_tags(["text", "writing"]),
            ToolRecord::new("calorie-calculator", "Calorie Calculator", "Daily calorie needs", "calculators")
                .with_icon("Flame")
                .with_tags(["health", "diet"])
                .new_badge(),
            ToolRecord::new(
                "body-measurement-converter",
                "Body Measurement Converter",
                "Convert heights and weights between unit systems",
                "converters",
            )
            .with_icon("Ruler")
            .with_tags(["health", "bmi", "units"]),
            ToolRecord::new("case-converter", "case converter", "Change TEXT case", "text-tools")
                .with_icon("CaseSensitive")
                .with_tags(["text", "case"])
                .new_badge(),
            ToolRecord::new("orphan-tool", "Orphan Tool", "Belongs to a retired category", "retired")
                .with_icon("Hash"),
        ],
    )
}

pub fn registry() -> CatalogRegistry {
    let logger: SharedLogger = Arc::new(NoOpLogger::new());
    // The orphan's dangling category is only a warning in lenient mode
    CatalogRegistry::new(definition(), &logger).expect("fixture catalog loads")
}
