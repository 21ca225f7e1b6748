use clap::Args;
use fatigueboard_core::SessionDraft;

use super::Workspace;

#[derive(Args)]
pub struct LogArgs {
    /// Muscle group trained (e.g. "chest", "Hamstrings")
    muscle: String,
    /// Duration in minutes
    #[arg(short, long, allow_negative_numbers = true)]
    minutes: i64,
    /// Perceived intensity, 1-5 (rounded and clamped)
    #[arg(short, long, allow_negative_numbers = true)]
    load: f64,
    /// Optional free-text note
    #[arg(short, long)]
    note: Option<String>,
    /// Print the logged session as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: LogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::open()?;

    let session = SessionDraft {
        muscle: args.muscle,
        minutes: args.minutes,
        load: args.load,
        note: args.note,
    }
    .validate(ws.now)?;

    let logged = ws.state.log_session(session, &ws.config.model);
    ws.save()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&logged)?);
        return Ok(());
    }

    let session = &logged.session;
    let contribution = &logged.contribution;
    println!(
        "Logged {} session {} ({} min, load {})",
        session.muscle,
        session.id,
        session.minutes.get(),
        session.load.get()
    );
    println!(
        "  {}: +{:.1} -> {:.1}",
        session.muscle,
        contribution.delta,
        ws.state.fatigue.get(session.muscle)
    );
    for &neighbor in contribution.synergists {
        println!(
            "  {}: +{:.0} spillover -> {:.1}",
            neighbor,
            contribution.spill,
            ws.state.fatigue.get(neighbor)
        );
    }
    Ok(())
}
