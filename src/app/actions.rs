use anyhow::Result;

use super::state::{App, LogLevel};
use crate::delivery::{deliver, LineEnding};
use crate::script::ScriptGenerator;

/// Renders the current selection and writes it to the configured output path.
/// Failures land in the status line; they never end the session.
pub fn generate_script(app: &mut App) {
    if app.selection.is_empty() {
        app.set_status("Please select at least one application!");
        return;
    }

    match render_and_write(app) {
        Ok(count) => {
            let message = format!(
                "Wrote {} with {} app(s) [{}].",
                app.output.display(),
                count,
                app.method
            );
            app.log("Installer generated".to_string(), LogLevel::Success);
            app.set_status(message);
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "script generation failed");
            app.log(format!("Error: {e}"), LogLevel::Error);
            app.set_status(format!("Generation failed: {e:#}"));
        }
    }
}

fn render_and_write(app: &App) -> Result<usize> {
    let apps = app.catalog.resolve(app.selection.ids())?;
    let script = ScriptGenerator::new(&apps, app.method)?.generate();
    deliver(&script, &app.output, LineEnding::Lf)?;
    Ok(apps.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;
    use crate::script::InstallMethod;

    #[test]
    fn refuses_empty_selection() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("install-apps.bat");
        let mut app = App::new(sample_catalog(), InstallMethod::Auto, output.clone());

        generate_script(&mut app);

        assert!(!output.exists());
        assert!(app.status.contains("select at least one"));
    }

    #[test]
    fn writes_selected_apps_with_current_method() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("install-apps.bat");
        let mut app = App::new(sample_catalog(), InstallMethod::Auto, output.clone());
        app.selection.toggle("vlc");
        app.cycle_method();

        generate_script(&mut app);

        let script = std::fs::read_to_string(&output).unwrap();
        assert!(script.contains("::   Install Method: WINGET\n"));
        assert!(script.contains(":: [1/1] VLC\n"));
        assert!(app.status.starts_with("Wrote "));
    }
}
