use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use gridiron_batch::{DEFAULT_DRIVES, DriveStudy};
use gridiron_engine::{KICKOFF_SPOT, Urgency};

use crate::{
    schema::DrivesFile,
    util::{Output, percent},
};

use super::{FIRST_TEAM_NAME, SeedArg, team_config};

/// What the team needs from each drive.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Need {
    #[default]
    Nothing,
    Touchdown,
    Score,
}

impl From<Need> for Urgency {
    fn from(need: Need) -> Self {
        match need {
            Need::Nothing => Urgency::None,
            Need::Touchdown => Urgency::NeedTouchdown,
            Need::Score => Urgency::NeedScore,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DrivesArg {
    /// JSON team file
    #[arg(long, value_name = "PATH")]
    team: Option<PathBuf>,
    #[arg(long)]
    name: Option<String>,
    /// Go for two after every touchdown
    #[arg(long)]
    two_point: bool,
    #[clap(flatten)]
    seed: SeedArg,
    /// Number of drives to simulate
    #[arg(long, default_value_t = DEFAULT_DRIVES)]
    drives: usize,
    /// Starting field position (yards from the team's own goal line)
    #[arg(long, default_value_t = KICKOFF_SPOT)]
    start: f64,
    /// Play every drive needing a touchdown or any score (nothing, touchdown, score)
    #[arg(long, default_value = "nothing")]
    need: Need,
    /// Also write the report as JSON to stdout
    #[arg(long)]
    json: bool,
    /// Write the report as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DrivesArg) -> anyhow::Result<()> {
    let DrivesArg {
        team,
        name,
        two_point,
        seed,
        drives,
        start,
        need,
        json,
        output,
    } = arg;
    let config = team_config(FIRST_TEAM_NAME, team.as_ref(), name.as_ref(), *two_point)?;

    eprintln!(
        "Simulating {drives} drives for {} from the {start:.1}",
        config.name
    );
    let report = DriveStudy::new(config.clone())
        .drives(*drives)
        .start(*start)
        .urgency((*need).into())
        .seed(seed.seed())
        .run()
        .context("Failed to run drive study")?;

    eprintln!();
    eprintln!("Drive outcomes:");
    for share in &report.outcomes {
        eprintln!(
            "  {:<18} {:>7} ({})",
            share.outcome.to_string(),
            share.count,
            percent(share.fraction)
        );
    }
    eprintln!("Points per drive:");
    for share in &report.points {
        eprintln!(
            "  {:<18} {:>7} ({})",
            share.points,
            share.count,
            percent(share.fraction)
        );
    }
    if let Some(plays) = &report.plays_per_drive {
        eprintln!("Plays per drive: mean {:.2}, max {}", plays.mean, plays.max);
    }

    if *json || output.is_some() {
        let file = DrivesFile {
            simulated_at: Utc::now(),
            team: config,
            report,
        };
        Output::save_json(&file, output.clone())?;
        if let Some(path) = output {
            eprintln!("Report saved to {}", path.display());
        }
    }

    Ok(())
}
