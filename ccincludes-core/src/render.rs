//! Render include fragments from templates and persist them per variant.

use crate::error::{BuildError, Result};
use crate::model::Payload;
use colored::Colorize;
use minijinja::{AutoEscape, Environment, context, path_loader};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// What to do with a rendered fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Overwrite `{variant_dir}/{template}` with the fragment plus one newline
    Write,
    /// Hand the fragment back without touching disk
    Return,
    /// Append the fragment plus one newline to the existing `{variant_dir}/{target}`
    Append { target: &'a str },
}

pub struct IncludeRenderer {
    env: Environment<'static>,
    output_root: PathBuf,
    echo: bool,
}

/// Fresh environment with auto-escaping off. Escape mode is fixed when a
/// template compiles, so this must run before any template is added.
fn configured_env() -> Environment<'static> {
    let mut env = Environment::new();
    // Fragments are HTML already; URLs must come through verbatim
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

impl IncludeRenderer {
    /// Load templates by name from `templates_dir`, writing under `output_root`.
    pub fn new(templates_dir: impl AsRef<Path>, output_root: impl Into<PathBuf>) -> Self {
        let mut env = configured_env();
        env.set_loader(path_loader(templates_dir.as_ref().to_path_buf()));
        Self::with_environment(env, output_root)
    }

    /// Use templates registered in memory instead of a directory.
    pub fn from_sources<I, N, S>(templates: I, output_root: impl Into<PathBuf>) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut env = configured_env();
        for (name, source) in templates {
            env.add_template_owned(name.into(), source.into())?;
        }
        Ok(Self::with_environment(env, output_root))
    }

    fn with_environment(env: Environment<'static>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            env,
            output_root: output_root.into(),
            echo: false,
        }
    }

    /// Echo write and append actions to stdout.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn variant_dir(&self, payload_dir: &str) -> PathBuf {
        self.output_root.join(payload_dir)
    }

    /// Render `template` with the payload's `json` and `prefix`, trimmed, then apply `destination`.
    pub fn render<T: Serialize>(
        &self,
        template: &str,
        payload: &Payload<T>,
        destination: Destination<'_>,
    ) -> Result<String> {
        let tmpl = self.env.get_template(template)?;
        let rendered = tmpl.render(context! {
            json => &payload.json,
            prefix => &payload.prefix,
        })?;
        let rendered = rendered.trim().to_string();

        let dir = self.variant_dir(payload.variant.dir_name());
        match destination {
            Destination::Return => {}
            Destination::Write => {
                fs::create_dir_all(&dir).map_err(|e| BuildError::io(&dir, e))?;
                let file = dir.join(template);
                fs::write(&file, format!("{}\n", rendered)).map_err(|e| BuildError::io(&file, e))?;
                info!("Wrote {}", file.display());
                if self.echo {
                    println!(
                        "{} wrote {}",
                        "✓".green().bold(),
                        file.display().to_string().bright_white()
                    );
                }
            }
            Destination::Append { target } => {
                let file = dir.join(target);
                let mut out = OpenOptions::new().append(true).open(&file).map_err(|e| {
                    if e.kind() == ErrorKind::NotFound {
                        BuildError::MissingFragment { path: file.clone() }
                    } else {
                        BuildError::io(&file, e)
                    }
                })?;
                writeln!(out, "{}", rendered).map_err(|e| BuildError::io(&file, e))?;
                info!("Appended {} to {}", template, file.display());
                if self.echo {
                    println!(
                        "{} appended {} to {}",
                        "✓".green().bold(),
                        template.cyan(),
                        file.display().to_string().bright_white()
                    );
                }
            }
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AssetMap, MenuEntry, Variant};
    use tempfile::TempDir;

    fn renderer(root: &Path) -> IncludeRenderer {
        IncludeRenderer::from_sources(
            [
                ("list.html", "\n  {% for e in json %}[{{ e.title }}={{ e.url }}]{% endfor %}  \n"),
                ("tail.html", "<tail prefix=\"{{ prefix }}\">"),
            ],
            root,
        )
        .unwrap()
    }

    fn payload(variant: Variant, url: &str) -> Payload<Vec<MenuEntry>> {
        Payload {
            variant,
            prefix: String::new(),
            json: vec![MenuEntry::new(1, "Home", url)],
        }
    }

    #[test]
    fn test_return_trims_and_does_not_write() {
        let tmp = TempDir::new().unwrap();
        let r = renderer(tmp.path());

        let out = r.render("list.html", &payload(Variant::Path, "/"), Destination::Return).unwrap();

        assert_eq!(out, "[Home=/]");
        assert!(!tmp.path().join("includes_path").exists());
    }

    #[test]
    fn test_write_overwrites_with_single_newline() {
        let tmp = TempDir::new().unwrap();
        let r = renderer(tmp.path());

        r.render("list.html", &payload(Variant::Full, "https://a/"), Destination::Write).unwrap();
        r.render("list.html", &payload(Variant::Full, "https://b/"), Destination::Write).unwrap();

        let written = fs::read_to_string(tmp.path().join("includes_full/list.html")).unwrap();
        assert_eq!(written, "[Home=https://b/]\n");
    }

    #[test]
    fn test_urls_are_not_html_escaped() {
        let tmp = TempDir::new().unwrap();
        let r = renderer(tmp.path());
        let out = r
            .render("list.html", &payload(Variant::Full, "https://a/?x=1&y=2"), Destination::Return)
            .unwrap();
        assert_eq!(out, "[Home=https://a/?x=1&y=2]");
    }

    #[test]
    fn test_append_extends_existing_fragment() {
        let tmp = TempDir::new().unwrap();
        let r = renderer(tmp.path());
        r.render("list.html", &payload(Variant::Path, "/"), Destination::Write).unwrap();

        let tail = Payload {
            variant: Variant::Path,
            prefix: String::new(),
            json: AssetMap::new(),
        };
        r.render("tail.html", &tail, Destination::Append { target: "list.html" }).unwrap();

        let written = fs::read_to_string(tmp.path().join("includes_path/list.html")).unwrap();
        assert_eq!(written, "[Home=/]\n<tail prefix=\"\">\n");
        assert!(!tmp.path().join("includes_path/tail.html").exists());
    }

    #[test]
    fn test_append_requires_existing_target() {
        let tmp = TempDir::new().unwrap();
        let r = renderer(tmp.path());

        let destination = Destination::Append { target: "list.html" };
        let err = r
            .render("tail.html", &payload(Variant::Full, "/"), destination)
            .unwrap_err();

        assert!(matches!(err, BuildError::MissingFragment { .. }));
        assert!(!tmp.path().join("includes_full/list.html").exists());
    }

    #[test]
    fn test_missing_template_is_error() {
        let tmp = TempDir::new().unwrap();
        let r = renderer(tmp.path());
        let err = r
            .render("nope.html", &payload(Variant::Full, "/"), Destination::Return)
            .unwrap_err();
        assert!(matches!(err, BuildError::Template(_)));
    }

    #[test]
    fn test_directory_loader() {
        let templates = TempDir::new().unwrap();
        fs::write(templates.path().join("one.html"), "{{ prefix }}|{{ json | length }}").unwrap();
        let out = TempDir::new().unwrap();

        let r = IncludeRenderer::new(templates.path(), out.path());
        let p = Payload {
            variant: Variant::Full,
            prefix: "https://creativecommons.org".to_string(),
            json: vec![1, 2, 3],
        };

        assert_eq!(
            r.render("one.html", &p, Destination::Return).unwrap(),
            "https://creativecommons.org|3"
        );
    }
}
