use anyhow::Result;
use tracing::debug;

use super::{attach, build_app, dispatch_mode, work_context};
use taskpick_core::Error;

pub fn select_command(
    file: Option<&str>,
    here: bool,
    prompt_args: bool,
    refresh: bool,
) -> Result<()> {
    let app = build_app()?;
    let ctx = work_context(file)?;
    let mode = dispatch_mode(app.config().default_mode, here, prompt_args);
    debug!("selecting with mode {:?} (refresh: {})", mode, refresh);

    let result = if refresh {
        app.refresh_and_select(&ctx, mode)
    } else {
        app.select_task(&ctx, mode)
    };

    match result {
        Ok(Some(sink)) => {
            println!("[{}]", sink.name());
            attach(&sink);
            Ok(())
        }
        Ok(None) => {
            println!("Nothing to run.");
            Ok(())
        }
        // User-visible conditions, not crashes.
        Err(e @ (Error::NoProject | Error::Discovery(_) | Error::Spawn(_))) => {
            eprintln!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
