use anyhow::{Context, Result};
use log::info;
use monster_quest::{
    FileArt, GameConfig, GameSession, JsonFileStore, LiveRng, SpeciesCatalog, StdConsole, World,
    ZoneAtlas,
};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load(config_path.as_deref()).context("loading settings")?;

    let species = SpeciesCatalog::load(&config.data_dir).context("loading species")?;
    let zones = ZoneAtlas::load(&config.data_dir).context("loading zones")?;
    let art = FileArt::new(config.art_dir.clone());
    let mut store = JsonFileStore::open(&config.save_path)
        .with_context(|| format!("opening save file {}", config.save_path.display()))?;
    let mut rng = LiveRng::from_seed(config.rng_seed);
    let mut console = StdConsole;
    info!("{} species and {} zones ready", species.len(), zones.len());

    let world = World {
        species: &species,
        zones: &zones,
        art: &art,
    };
    let mut session = GameSession::start(config, world, &mut store, &mut console, &mut rng)?;
    session.explore()?;
    Ok(())
}
