//! Persists the form between runs so consecutive commands share one page.

use std::{fs, io::ErrorKind, path::Path};

use anyhow::Context;
use form_sync::FormState;

pub fn load_state(path: &Path) -> anyhow::Result<FormState> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(FormState::default()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read form state '{}'", path.display()))
        }
    };
    serde_json::from_str(&raw)
        .with_context(|| format!("form state '{}' is not valid JSON", path.display()))
}

pub fn save_state(path: &Path, state: &FormState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("failed to create parent directory '{}'", parent.display())
        })?;
    }
    let raw = serde_json::to_string_pretty(state)?;
    fs::write(path, raw)
        .with_context(|| format!("failed to write form state '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    #[test]
    fn missing_file_is_a_blank_form() {
        let state = load_state(Path::new("./definitely/not/here.json")).expect("load");
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn saved_state_loads_back() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let temp_root = env::temp_dir().join(format!("orders_console_state_{suffix}"));
        let path = temp_root.join("nested").join("form.json");

        let mut state = FormState::default();
        state.order.id = "42".into();
        state.flash = "Success".into();
        save_state(&path, &state).expect("save");

        assert_eq!(load_state(&path).expect("load"), state);
        fs::remove_dir_all(temp_root).expect("cleanup");
    }

    #[test]
    fn corrupt_state_is_reported() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("orders_console_corrupt_{suffix}.json"));
        fs::write(&path, "{not json").expect("write");

        let err = load_state(&path).expect_err("must fail");
        assert!(err.to_string().contains("not valid JSON"), "{err}");
        fs::remove_file(path).expect("cleanup");
    }
}
