//! One linear fetch, transform, render pass over every endpoint.

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::model::{AssetMap, MenuEntry, Variant, VariantPair};
use crate::render::{Destination, IncludeRenderer};
use crate::settings::Settings;
use crate::transform::{transform_assets, transform_header_footer};
use ccincludes_fetch::Fetcher;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Files touched by a successful run, in the order they were written or appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    pub appended: Vec<PathBuf>,
}

impl BuildReport {
    pub fn fragment_count(&self) -> usize {
        self.written.len() + self.appended.len()
    }
}

pub struct Builder<'a> {
    settings: &'a Settings,
    fetcher: Fetcher,
    renderer: IncludeRenderer,
    report: BuildReport,
}

impl<'a> Builder<'a> {
    pub fn new(settings: &'a Settings) -> Result<Self> {
        let fetcher = Fetcher::new(settings.timeout, settings.credentials.clone())?;
        let renderer = IncludeRenderer::new(&settings.templates_dir, settings.output_root.clone())
            .with_echo(settings.style.debug);
        Ok(Self::with_parts(settings, fetcher, renderer))
    }

    pub fn with_parts(settings: &'a Settings, fetcher: Fetcher, renderer: IncludeRenderer) -> Self {
        Self {
            settings,
            fetcher,
            renderer,
            report: BuildReport::default(),
        }
    }

    /// Prime the cache, then process every endpoint in order. The first error stops the run;
    /// fragments already written stay on disk.
    pub async fn run(mut self) -> Result<BuildReport> {
        info!("Building includes from {}", self.settings.origin);
        self.fetcher.prime(&self.settings.origin).await?;

        for endpoint in Endpoint::ALL {
            self.process(endpoint).await?;
        }

        Ok(self.report)
    }

    async fn process(&mut self, endpoint: Endpoint) -> Result<()> {
        let settings = self.settings;
        let url = endpoint.url(&settings.origin);
        let domain = settings.domain.as_str();
        let style = settings.style;

        if style.debug {
            println!("{} {}", "###".bright_blue().bold(), endpoint.key().bright_white().bold());
        }
        debug!("Processing {} via {}", endpoint.key(), url);

        match endpoint {
            Endpoint::MenuHeader | Endpoint::MenuFooter => {
                let menu: Vec<MenuEntry> = self.fetcher.get_json(&url).await?;
                let pair = transform_header_footer(&menu, domain, &style)?;
                self.write_both(endpoint.template(), &pair)
            }
            Endpoint::Scripts => {
                let assets: AssetMap = self.fetcher.get_json(&url).await?;
                let pair = transform_assets(&assets, domain, &style)?;
                // Scripts live at the end of the footer fragment rather than in a file of their own
                let footer = Endpoint::MenuFooter.template();
                for payload in pair.iter() {
                    let destination = Destination::Append { target: footer };
                    self.renderer.render(endpoint.template(), payload, destination)?;
                    let path = self.fragment_path(payload.variant, footer);
                    self.report.appended.push(path);
                }
                Ok(())
            }
            Endpoint::Styles => {
                let assets: AssetMap = self.fetcher.get_json(&url).await?;
                let pair = transform_assets(&assets, domain, &style)?;
                self.write_both(endpoint.template(), &pair)
            }
        }
    }

    fn write_both<T: Serialize>(&mut self, template: &str, pair: &VariantPair<T>) -> Result<()> {
        for payload in pair.iter() {
            self.renderer.render(template, payload, Destination::Write)?;
            let path = self.fragment_path(payload.variant, template);
            self.report.written.push(path);
        }
        Ok(())
    }

    fn fragment_path(&self, variant: Variant, name: &str) -> PathBuf {
        self.renderer.variant_dir(variant.dir_name()).join(name)
    }
}

/// Run a full build with `settings`.
pub async fn run(settings: &Settings) -> Result<BuildReport> {
    Builder::new(settings)?.run().await
}
