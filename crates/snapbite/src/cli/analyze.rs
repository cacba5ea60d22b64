//! The `snapbite analyze` command.

use clap::Args;
use snapbite_core::{
    AnalysisLogEntry, AnalysisPipeline, Config, Goal, ReferenceObject, SuggestionRequest,
    UserProfile,
};
use std::path::PathBuf;
use std::str::FromStr;

use super::{format, journal};

/// Arguments for the `analyze` command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Meal photo to analyze
    #[arg(required = true)]
    pub image: PathBuf,

    /// Language for food names and evaluations (overrides config)
    #[arg(long)]
    pub language: Option<String>,

    /// Scale reference object name (overrides config)
    #[arg(long)]
    pub reference_name: Option<String>,

    /// Scale reference object length in centimeters (overrides config)
    #[arg(long)]
    pub reference_cm: Option<f64>,

    /// Also request a next-meal suggestion (requires --height, --weight, --goal)
    #[arg(long)]
    pub suggest: bool,

    /// Height in centimeters
    #[arg(long, requires = "suggest")]
    pub height: Option<f64>,

    /// Weight in kilograms
    #[arg(long, requires = "suggest")]
    pub weight: Option<f64>,

    /// Dietary goal: cut, maintain or bulk
    #[arg(long, requires = "suggest")]
    pub goal: Option<String>,

    /// Label of the photographed meal
    #[arg(long, default_value = "lunch")]
    pub meal: String,

    /// Print the raw JSON report instead of the formatted reply
    #[arg(long)]
    pub json: bool,

    /// User identifier to journal this analysis under
    #[arg(long)]
    pub user: Option<String>,

    /// Message identifier to journal this analysis under
    #[arg(long, requires = "user")]
    pub message_id: Option<String>,
}

/// Execute the analyze command.
pub async fn execute(args: AnalyzeArgs, config: &Config) -> anyhow::Result<()> {
    let mut pipeline = AnalysisPipeline::from_config(config)?;

    if let Some(language) = &args.language {
        pipeline = pipeline.with_language(language.clone());
    }
    if args.reference_name.is_some() || args.reference_cm.is_some() {
        let defaults = &config.reference;
        pipeline = pipeline.with_reference(ReferenceObject::new(
            args.reference_name
                .clone()
                .unwrap_or_else(|| defaults.name.clone()),
            args.reference_cm.unwrap_or(defaults.length_cm),
        ));
    }

    let suggestion = if args.suggest {
        Some(suggestion_request(&args)?)
    } else {
        None
    };

    let report = pipeline.run(&args.image, suggestion.as_ref()).await?;

    if let (Some(user), Some(message_id)) = (&args.user, &args.message_id) {
        let entry = AnalysisLogEntry::new(user.clone(), message_id.clone(), report.analysis.clone());
        journal::append(&config.journal_path(), &entry)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format::render_report(&report));
    }

    Ok(())
}

/// Assemble the suggestion request from the profile flags.
fn suggestion_request(args: &AnalyzeArgs) -> anyhow::Result<SuggestionRequest> {
    let (Some(height_cm), Some(weight_kg), Some(goal)) = (args.height, args.weight, &args.goal)
    else {
        anyhow::bail!("--suggest requires --height, --weight and --goal");
    };
    let goal = Goal::from_str(goal)?;
    Ok(SuggestionRequest {
        profile: UserProfile {
            height_cm,
            weight_kg,
            goal,
        },
        next_meal: args.meal.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> AnalyzeArgs {
        AnalyzeArgs {
            image: PathBuf::from("meal.jpg"),
            language: None,
            reference_name: None,
            reference_cm: None,
            suggest: true,
            height: Some(170.0),
            weight: Some(60.0),
            goal: Some("cut".to_string()),
            meal: "breakfast".to_string(),
            json: false,
            user: None,
            message_id: None,
        }
    }

    #[test]
    fn test_suggestion_request_from_flags() {
        let request = suggestion_request(&base_args()).unwrap();
        assert_eq!(request.profile.goal, Goal::Cut);
        assert_eq!(request.next_meal, "breakfast");
    }

    #[test]
    fn test_suggestion_request_rejects_missing_profile() {
        let mut args = base_args();
        args.weight = None;
        assert!(suggestion_request(&args).is_err());
    }

    #[test]
    fn test_suggestion_request_rejects_unknown_goal() {
        let mut args = base_args();
        args.goal = Some("tone up".to_string());
        let err = suggestion_request(&args).unwrap_err();
        assert!(err.to_string().contains("tone up"));
    }
}
