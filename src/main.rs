use cosmic::app::Settings;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::Limits;

mod application;
mod components;
mod localize;
mod message;
mod pages;

use mealplan::config;

use application::{Flags, MealPlanner};
use config::{CONFIG_VERSION, MealPlanConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cosmic_cfg = cosmic::cosmic_config::Config::new(application::APP_ID, CONFIG_VERSION)
        .expect("Failed to create cosmic config");
    let config = MealPlanConfig::get_entry(&cosmic_cfg).unwrap_or_else(|(_, cfg)| cfg);

    // Log to the systemd user journal (`journalctl --user -t mealplan -f`).
    // Our own targets log at info/debug (per config), everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                let target = metadata.target();
                if target.starts_with("mealplan")
                    || target.starts_with("application")
                    || target.starts_with("pages")
                    || target.starts_with("components")
                {
                    let max = if mealplan::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        let journal = systemd_journal_logger::JournalLog::new()?.with_syslog_identifier("mealplan".to_string());

        mealplan::set_debug_logging(config.debug_logging);

        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).map_err(|e| e.to_string())?;
        // Global max must be Debug so our debug logs can pass through when toggled
        log::set_max_level(log::LevelFilter::Debug);
    }

    localize::localize();

    let mut settings = Settings::default();
    settings = settings.size_limits(Limits::NONE.min_width(420.0).min_height(560.0));

    let flags = Flags { config };
    cosmic::app::run::<MealPlanner>(settings, flags)?;

    Ok(())
}
