use advoca_app::app;
use advoca_app::config::SiteConfig;

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("advoca_app", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = SiteConfig::load();
    log::debug!(
        "starting with autoplay interval {:?}",
        config.autoplay_interval()
    );

    app::run(config)
}
