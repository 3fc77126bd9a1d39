use anyhow::Result;

pub fn run() -> Result<()> {
    duet_core::launcher::run()?;
    Ok(())
}
