//! Location of the settings file and the ride database.

use std::path::PathBuf;

use ridelog_core::Settings;

/// Settings file name inside the config directory.
const SETTINGS_FILE: &str = "ridelog.params";

/// Database file name inside the data directory.
const DATABASE_FILE: &str = "rides.db";

/// Settings file: `RIDELOG_SETTINGS`, else the XDG config directory.
pub fn resolve_settings_path() -> anyhow::Result<PathBuf> {
    settings_path_from(&process_env)
}

/// Database file: the `db` setting when present, else the XDG data directory.
pub fn resolve_database_path(settings: &Settings) -> anyhow::Result<PathBuf> {
    database_path_from(settings, &process_env)
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Non-blank value of `key`.
fn non_blank(env: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    env(key).filter(|value| !value.trim().is_empty())
}

fn settings_path_from(env: &dyn Fn(&str) -> Option<String>) -> anyhow::Result<PathBuf> {
    if let Some(value) = non_blank(env, "RIDELOG_SETTINGS") {
        return Ok(PathBuf::from(value));
    }
    Ok(xdg_dir(env, "XDG_CONFIG_HOME", &[".config"])?.join(SETTINGS_FILE))
}

fn database_path_from(
    settings: &Settings,
    env: &dyn Fn(&str) -> Option<String>,
) -> anyhow::Result<PathBuf> {
    let db = settings.db().trim();
    if !db.is_empty() {
        return Ok(PathBuf::from(db));
    }
    Ok(xdg_dir(env, "XDG_DATA_HOME", &[".local", "share"])?.join(DATABASE_FILE))
}

/// `$<xdg_var>/ridelog`, else `$HOME/<fallback...>/ridelog`.
fn xdg_dir(
    env: &dyn Fn(&str) -> Option<String>,
    xdg_var: &str,
    fallback: &[&str],
) -> anyhow::Result<PathBuf> {
    if let Some(value) = non_blank(env, xdg_var) {
        return Ok(PathBuf::from(value).join("ridelog"));
    }
    let home = non_blank(env, "HOME")
        .ok_or_else(|| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    let mut dir = PathBuf::from(home);
    dir.extend(fallback);
    Ok(dir.join("ridelog"))
}
