use phonebook::config::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_and_load_round_trip() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.display.show_ids = true;
    config.behavior.seed_sample_contacts = false;
    config.save_to(&path)?;

    let loaded = Config::load_from(&path)?;
    assert!(loaded.display.show_ids);
    assert!(!loaded.behavior.seed_sample_contacts);
    Ok(())
}

#[test]
fn test_ascii_icons_when_glyphs_disabled() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "[display]\nuse_glyphs = false\n")?;

    let loaded = Config::load_from(&path)?;
    assert_eq!(loaded.display.icons.success, "[OK]");
    assert_eq!(loaded.display.icons.error, "[X]");
    Ok(())
}

#[test]
fn test_invalid_toml_is_an_error() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "[behavior\nconfirm_delete = maybe")?;

    assert!(Config::load_from(&path).is_err());
    Ok(())
}
