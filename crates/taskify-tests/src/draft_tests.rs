use taskify_core::*;

#[test]
fn test_new_draft_defaults() {
    let draft = ScriptDraft::new("backup", "pg_dump app");
    assert_eq!(draft.kind, "SCRIPT");
    assert!(draft.team.is_none());
    assert!(draft.options().is_empty());
}

#[test]
fn test_edits_return_new_drafts() {
    let base = ScriptDraft::new("backup", "pg_dump app");
    let edited = base.add_option();
    assert_eq!(base.options().len(), 0);
    assert_eq!(edited.options().len(), 1);
    assert_eq!(edited.options()[0], DraftOption::default());
}

#[test]
fn test_set_and_remove_option() {
    let draft = ScriptDraft::new("backup", "pg_dump app")
        .with_option("retries", "3")
        .add_option();
    let draft = draft.set_option(1, "timeout", "60").unwrap();
    assert_eq!(draft.options()[1].key, "timeout");

    let removed = draft.remove_option(0).unwrap();
    assert_eq!(removed.options().len(), 1);
    assert_eq!(removed.options()[0].key, "timeout");
    assert_eq!(draft.options().len(), 2);
}

#[test]
fn test_option_index_out_of_range() {
    let draft = ScriptDraft::new("backup", "pg_dump app").add_option();
    assert_eq!(
        draft.remove_option(3).unwrap_err(),
        CoreError::OptionIndex { index: 3, len: 1 }
    );
    assert!(draft.set_option(1, "k", "v").is_err());
}

#[test]
fn test_default_options_skips_blank_keys_and_last_wins() {
    let draft = ScriptDraft::new("backup", "pg_dump app")
        .with_option("retries", "3")
        .add_option()
        .with_option("  ", "ignored")
        .with_option("retries", "5");
    let options = draft.default_options();
    assert_eq!(options.len(), 1);
    assert_eq!(options.get("retries").map(String::as_str), Some("5"));
}

#[test]
fn test_validate_requires_name_cmd_and_team() {
    assert_eq!(
        ScriptDraft::new("", "ls").with_team("1").validate(),
        Err(CoreError::MissingField("name"))
    );
    assert_eq!(
        ScriptDraft::new("list", " ").with_team("1").validate(),
        Err(CoreError::MissingField("cmd"))
    );
    assert_eq!(
        ScriptDraft::new("list", "ls").validate(),
        Err(CoreError::MissingField("team"))
    );
    assert_eq!(
        ScriptDraft::new("list", "ls").with_team("ops").validate(),
        Err(CoreError::InvalidTeamId("ops".into()))
    );
    assert!(ScriptDraft::new("list", "ls").with_team("4").validate().is_ok());
}

#[test]
fn test_team_id_parses_numeric() {
    let draft = ScriptDraft::new("list", "ls").with_team(" 12 ").with_kind("SHELL");
    assert_eq!(draft.team_id(), Ok(12));
    assert_eq!(draft.kind, "SHELL");
}
