use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, bail};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use squadstats::csv::{write_quantiles, CsvWriter};
use squadstats::injury::injury_categories;
use squadstats::print::{tabulate_injury_categories, tabulate_readiness, tabulate_readiness_quantiles};
use squadstats::stats::TeamStatistics;
use squadstats::team::Teams;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the squads from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// only report on the named team
    #[clap(short = 't', long)]
    team: Option<String>,

    /// report on a single player instead of whole teams
    #[clap(short = 'p', long)]
    player: Option<String>,

    /// directory to write readiness quantiles to, one CSV per team
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.file.as_ref().ok_or(anyhow!("squads file must be specified"))?;
        if self.player.is_some() && (self.team.is_some() || self.out.is_some()) {
            bail!("the -p flag cannot be combined with -t or -o");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let teams = Teams::read_json_file(args.file.unwrap())?;
    info!("loaded {} teams", teams.0.len());

    if let Some(player_name) = args.player {
        let (team_name, player) = teams
            .find_player(&player_name)
            .ok_or(anyhow!("no player named '{player_name}'"))?;
        info!(
            "{player_name} ({team_name}): {} injury events, {} readiness observations",
            player.injuries.len(),
            player.readiness.observations()
        );
        let injuries = injury_categories(std::slice::from_ref(player))?;
        println!("Injuries:\n{}", Console::default().render(&tabulate_injury_categories(&injuries)));
        println!("Readiness:\n{}", Console::default().render(&tabulate_readiness(&player.readiness)));
        return Ok(());
    }

    if let Some(out) = &args.out {
        fs::create_dir_all(out)?;
    }

    let start_time = Instant::now();
    let mut reported = 0;
    for (team_name, team) in teams.iter() {
        if let Some(only) = &args.team {
            if only != team_name {
                continue;
            }
        }
        reported += 1;
        let stats = TeamStatistics::compute(&team.players)?;
        info!(
            "{team_name}: {} players, {} injuries across {} locations, {} readiness points",
            team.players.len(),
            stats.injuries.total(),
            stats.injuries.locations().len(),
            stats.readiness.len()
        );
        println!(
            "{team_name} injuries:\n{}",
            Console::default().render(&tabulate_injury_categories(&stats.injuries))
        );
        println!(
            "{team_name} readiness:\n{}",
            Console::default().render(&tabulate_readiness_quantiles(&stats.readiness))
        );

        if let Some(out) = &args.out {
            let path = out.join(format!("{team_name}_readiness.csv"));
            let mut csv = CsvWriter::create(&path)?;
            write_quantiles(&mut csv, &stats.readiness)?;
            info!("wrote {}", path.display());
        }
    }

    if reported == 0 {
        if let Some(team) = args.team {
            return Err(anyhow!("no team named '{team}'").into());
        }
    }
    let elapsed_time = start_time.elapsed();
    info!("reported on {reported} teams in {}s", elapsed_time.as_millis() as f64 / 1_000.);
    Ok(())
}
