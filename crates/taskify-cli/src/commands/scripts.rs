use anyhow::{Result, anyhow};
use colored::Colorize;
use taskify_client::HttpApi;
use taskify_core::ScriptDraft;

use crate::utils::{split_option, truncate};

pub async fn list(api: &HttpApi) -> Result<()> {
    let scripts = api.list_scripts().await?;
    if scripts.is_empty() {
        println!("No scripts found");
        return Ok(());
    }

    println!(
        "{:>6} | {:<24} | {:<40} | {:<8} | {:<8} | {:<6}",
        "ID", "NAME", "COMMAND", "TYPE", "STATUS", "TEAM"
    );
    println!("{}", "-".repeat(106));
    for script in scripts {
        println!(
            "{:>6} | {:<24} | {:<40} | {:<8} | {:<8} | {:<6}",
            script.id,
            truncate(&script.name, 24),
            truncate(&script.cmd, 40),
            script.kind,
            script.status,
            script.team.as_ref().map(|t| t.0.as_str()).unwrap_or("-"),
        );
    }
    Ok(())
}

pub async fn create(
    api: &HttpApi,
    name: String,
    cmd: String,
    team: String,
    kind: String,
    options: &[String],
) -> Result<()> {
    let mut draft = ScriptDraft::new(name, cmd).with_team(team).with_kind(kind);
    for raw in options {
        let (key, value) =
            split_option(raw).ok_or_else(|| anyhow!("Option must be KEY=VALUE, got {raw:?}"))?;
        draft = draft.with_option(key, value);
    }

    match api.create_script(&draft).await {
        Ok(script) => {
            println!("{}", "Script saved".green());
            println!("  ID:      {}", script.id);
            println!("  Name:    {}", script.name);
            println!("  Command: {}", script.cmd);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", "There was a failure while saving the script.".red());
            Err(e.into())
        }
    }
}

pub async fn teams(api: &HttpApi) -> Result<()> {
    let teams = api.list_teams().await?;
    if teams.is_empty() {
        println!("No teams found");
        return Ok(());
    }
    for team in teams {
        println!("{:>6}  {}", team.id, team.name);
    }
    Ok(())
}
