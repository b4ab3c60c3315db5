use warden_ledger::Ledger;
use warden_scripts::{ScriptResult, ScriptsClient};
use warden_utils::sessions::SessionBinder;
use warden_utils::time::StartTime;

pub type Error = anyhow::Error;

/// Process-scoped state handed to every command and event handler.
#[derive(Clone, Debug)]
pub struct Data {
    pub ledger: Ledger,
    pub scripts: ScriptsClient,
    pub script_sessions: SessionBinder<ScriptResult>,
    pub started: StartTime,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
