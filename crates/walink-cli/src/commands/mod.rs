use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};
use walink_config::AppConfig;
use walink_launch::{DispatchSettings, Dispatcher, SystemOpener};

pub mod call;
pub mod completions;
pub mod launch;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    pub fn dispatcher(&self) -> Dispatcher<SystemOpener> {
        Dispatcher::new(SystemOpener, dispatch_settings(self.config))
    }
}

pub fn dispatch_settings(config: &AppConfig) -> DispatchSettings {
    DispatchSettings {
        default_country_code: config.phone.default_country_code.clone(),
        link_host: config.link.host.clone(),
        handler: config.launch.handler.clone(),
        fallback: config.launch.fallback,
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
