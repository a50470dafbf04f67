use anyhow::Result;
use clap::Args;
use luis_api::LuisService;

#[derive(Args)]
pub struct UrlArgs {
    /// Utterance to encode into the URL
    pub text: String,
}

pub fn run(args: &UrlArgs, client: &impl LuisService) -> Result<()> {
    let uri = client.build_uri(&args.text)?;
    println!("{}", uri);
    Ok(())
}
