use anyhow::{Context, Result};

use loot::config::EditorConfig;
use loot::editor::LevelEditorScene;
use loot::engine::Engine;
use loot::scene::SceneDirector;

fn main() -> Result<()> {
    let config = match EditorConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    let director: SceneDirector = SceneDirector::new(Box::new(LevelEditorScene::new(config.clone())));

    Engine::builder()
        .with_title(&config.title)
        .with_size(config.window_width, config.window_height)
        .with_resizable(true)
        .with_ups(config.updates_per_second)
        .with_fps_limit(config.fps_limit)
        .run(director)
        .context("event loop failed")
}
