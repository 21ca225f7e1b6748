use fatigueboard_core::MuscleGroup;
use serde_json::json;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let groups: Vec<_> = MuscleGroup::ALL
            .iter()
            .map(|g| {
                json!({
                    "id": g.id(),
                    "label": g.label(),
                    "synergists": g.synergists(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for group in MuscleGroup::ALL {
        let synergists: Vec<_> = group.synergists().iter().map(|g| g.label()).collect();
        let spill = if synergists.is_empty() {
            "-".to_string()
        } else {
            synergists.join(", ")
        };
        println!("{:<11} ({:<10}) -> {}", group.label(), group.id(), spill);
    }
    Ok(())
}
