use anyhow::Result;

use super::build_app;
use taskpick_core::Error;

pub enum SinksAction {
    List,
    Focus(String),
    Kill(String),
    KillAll,
}

pub fn sinks_command(action: SinksAction) -> Result<()> {
    let app = build_app()?;

    match action {
        SinksAction::List => {
            let sinks = app.sinks();
            if sinks.is_empty() {
                // Informational, not an error.
                println!("No task sinks are live.");
                return Ok(());
            }
            for sink in sinks {
                let state = if sink.is_running() { "running" } else { "done" };
                println!("{}\t{}\t{}", sink.name(), state, sink.project());
            }
            Ok(())
        }
        SinksAction::Focus(name) => match app.focus_sink(&name) {
            Ok(sink) => {
                for line in sink.output().lines() {
                    println!("{line}");
                }
                Ok(())
            }
            Err(e @ Error::SinkNotFound(_)) => {
                eprintln!("{e}");
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
        SinksAction::Kill(name) => match app.kill_sink(&name) {
            Ok(()) => {
                println!("Killed {name}.");
                Ok(())
            }
            Err(e @ Error::SinkNotFound(_)) => {
                eprintln!("{e}");
                Ok(())
            }
            Err(e) => Err(e.into()),
        },
        SinksAction::KillAll => {
            let killed = app.kill_all_sinks()?;
            println!("Killed {killed} sink(s).");
            Ok(())
        }
    }
}
