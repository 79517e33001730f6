use anyhow::Result;

use super::{attach, build_app, work_context};
use taskpick_core::Error;

pub fn rerun_command() -> Result<()> {
    let app = build_app()?;
    let ctx = work_context(None)?;

    match app.rerun_last(&ctx) {
        Ok(sink) => {
            println!("[{}]", sink.name());
            attach(&sink);
            Ok(())
        }
        Err(e @ (Error::NoProject | Error::NoPriorRun(_) | Error::Spawn(_))) => {
            eprintln!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
