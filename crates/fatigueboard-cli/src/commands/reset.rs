use super::Workspace;

pub fn run(all: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut ws = Workspace::open()?;
    if all {
        ws.state.clear(ws.now);
        ws.save()?;
        println!("fatigue and history cleared");
    } else {
        ws.state.reset(ws.now);
        ws.save()?;
        println!("fatigue reset to zero");
    }
    Ok(())
}
