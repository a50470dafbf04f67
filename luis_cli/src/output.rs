use anyhow::Result;
use luis_api::types::{EntityRecommendation, IntentRecommendation, LuisResult};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown values fall back to a table.
    pub fn from_arg(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct IntentRow {
    #[tabled(rename = "Intent")]
    #[serde(rename = "Intent")]
    intent: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
}

#[derive(Tabled, Serialize)]
struct EntityRow {
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    entity_type: String,
    #[tabled(rename = "Entity")]
    #[serde(rename = "Entity")]
    entity: String,
    #[tabled(rename = "Span")]
    #[serde(rename = "Span")]
    span: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
}

fn build_intent_rows(intents: &[IntentRecommendation]) -> Vec<IntentRow> {
    intents
        .iter()
        .map(|i| IntentRow {
            intent: i.intent.clone(),
            score: format_score(i.score),
        })
        .collect()
}

fn build_entity_rows(entities: &[EntityRecommendation]) -> Vec<EntityRow> {
    entities
        .iter()
        .map(|e| EntityRow {
            entity_type: e.entity_type.clone(),
            entity: e.entity.clone(),
            span: format_span(e.start_index, e.end_index),
            score: format_score(e.score),
        })
        .collect()
}

// -- Table output --

pub fn print_result_table(result: &LuisResult) {
    println!("Intents");
    println!("{}", Table::new(build_intent_rows(&result.intents)));
    println!();
    println!("Entities");
    print_entities_table(&result.entities);
}

pub fn print_entities_table(entities: &[EntityRecommendation]) {
    println!("{}", Table::new(build_entity_rows(entities)));
}

// -- Markdown output --

pub fn print_result_markdown(result: &LuisResult) {
    let mut table = Table::new(build_intent_rows(&result.intents));
    table.with(Style::markdown());
    println!("### Intents\n\n{}\n", table);
    println!("### Entities\n");
    print_entities_markdown(&result.entities);
}

pub fn print_entities_markdown(entities: &[EntityRecommendation]) {
    let mut table = Table::new(build_entity_rows(entities));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

/// Intents and entities have different columns, so they go out as two
/// CSV blocks separated by a blank line.
pub fn print_result_csv(result: &LuisResult) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    write_csv_rows(&mut wtr, INTENT_HEADERS, build_intent_rows(&result.intents))?;
    drop(wtr);
    println!();
    print_entities_csv(&result.entities)
}

pub fn print_entities_csv(entities: &[EntityRecommendation]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    write_csv_rows(&mut wtr, ENTITY_HEADERS, build_entity_rows(entities))
}

const INTENT_HEADERS: &[&str] = &["Intent", "Score"];
const ENTITY_HEADERS: &[&str] = &["Type", "Entity", "Span", "Score"];

/// `serialize` only emits a header with the first row, so an empty block
/// gets its header written by hand.
fn write_csv_rows<W: std::io::Write, R: Serialize>(
    wtr: &mut csv::Writer<W>,
    headers: &[&str],
    rows: Vec<R>,
) -> Result<()> {
    if rows.is_empty() {
        wtr.write_record(headers)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{:.3}", score),
        None => "-".to_string(),
    }
}

fn format_span(start: Option<i64>, end: Option<i64>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{}..{}", start, end),
        _ => "-".to_string(),
    }
}
