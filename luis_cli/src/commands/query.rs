use anyhow::{bail, Result};
use clap::Args;
use luis_api::LuisService;

use crate::output::{
    print_entities_csv, print_entities_markdown, print_entities_table, print_json,
    print_result_csv, print_result_markdown, print_result_table, OutputFormat,
};

#[derive(Args)]
pub struct QueryArgs {
    /// Utterance to analyze
    pub text: String,

    /// Print only the first entity of this type (e.g. builtin.datetime.date)
    #[arg(long)]
    pub entity: Option<String>,
}

pub async fn run(
    args: &QueryArgs,
    client: &impl LuisService,
    format: &OutputFormat,
) -> Result<()> {
    let result = client.query(&args.text).await?;
    tracing::debug!(
        "{} intents, {} entities",
        result.intents.len(),
        result.entities.len()
    );

    if let Some(entity_type) = &args.entity {
        let Some(entity) = result.try_find_entity(entity_type) else {
            bail!("no entity of type '{}' found", entity_type);
        };
        let entities = std::slice::from_ref(entity);
        match format {
            OutputFormat::Table => print_entities_table(entities),
            OutputFormat::Json => print_json(entity),
            OutputFormat::Csv => print_entities_csv(entities)?,
            OutputFormat::Markdown => print_entities_markdown(entities),
        }
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_result_table(&result),
        OutputFormat::Json => print_json(&result),
        OutputFormat::Csv => print_result_csv(&result)?,
        OutputFormat::Markdown => print_result_markdown(&result),
    }
    Ok(())
}
