use clap::Subcommand;
use fatigueboard_core::SessionId;

use super::Workspace;

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List logged sessions, most recent first
    List {
        /// Show at most this many sessions
        #[arg(long)]
        limit: Option<usize>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a session by id (fatigue is not rolled back)
    Remove {
        /// Session id
        id: String,
    },
    /// Session count and minutes
    Totals {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HistoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::open()?;

    match action {
        HistoryAction::List { limit, json } => {
            let limit = limit.unwrap_or(usize::MAX);
            let sessions: Vec<_> = ws.state.history.iter().take(limit).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else if sessions.is_empty() {
                println!("No sessions logged yet.");
            } else {
                for s in sessions {
                    println!(
                        "{}  {}  {:<11} {:>4} min  load {}{}",
                        s.id,
                        s.logged_at.format("%Y-%m-%d %H:%M"),
                        s.muscle.label(),
                        s.minutes.get(),
                        s.load.get(),
                        s.note
                            .as_deref()
                            .map(|n| format!("  {n}"))
                            .unwrap_or_default()
                    );
                }
            }
        }
        HistoryAction::Remove { id } => {
            let id: SessionId = id
                .parse()
                .map_err(|e| format!("invalid session id '{id}': {e}"))?;
            match ws.state.delete_session(&id) {
                Some(_) => println!("removed {id}"),
                None => println!("no session {id}"),
            }
            ws.save()?;
        }
        HistoryAction::Totals { json } => {
            let totals = ws.state.history.totals();
            if json {
                println!("{}", serde_json::to_string_pretty(&totals)?);
            } else {
                println!("Sessions: {}", totals.session_count);
                println!("Minutes:  {}", totals.total_minutes);
                for (muscle, minutes) in ws.state.history.minutes_by_muscle() {
                    if minutes > 0 {
                        println!("  {:<11} {:>5} min", muscle.label(), minutes);
                    }
                }
            }
        }
    }
    Ok(())
}
