//! Split fetched payloads into `full` and `path` variants.
//!
//! The input is never touched: the path variant is built on a deep copy and the full
//! variant is a second copy of the untouched data.

use crate::error::{BuildError, Result};
use crate::model::{AssetMap, MenuEntry, Payload, Variant, VariantPair};
use crate::rewrite::{rewrite, site_prefix};
use crate::table::{TableStyle, format_table};
use std::io::{self, Write};

/// A collection of records that each carry one URL.
pub trait UrlRecords: Clone {
    /// Header row of the debug table.
    fn header() -> &'static [&'static str];

    /// Strip `prefix` from every URL in place and return one debug row per record.
    fn rewrite_urls(&mut self, prefix: &str, style: &TableStyle) -> Vec<Vec<String>>;
}

impl UrlRecords for Vec<MenuEntry> {
    fn header() -> &'static [&'static str] {
        &["ID", "Title", "Uniform Resource Locator (URL)"]
    }

    fn rewrite_urls(&mut self, prefix: &str, style: &TableStyle) -> Vec<Vec<String>> {
        self.iter_mut()
            .map(|entry| {
                let display = strip_url(&mut entry.url, prefix, style);
                vec![entry.id.to_string(), entry.title.clone(), display]
            })
            .collect()
    }
}

impl UrlRecords for AssetMap {
    fn header() -> &'static [&'static str] {
        &["ID", "Uniform Resource Locator (URL)"]
    }

    fn rewrite_urls(&mut self, prefix: &str, style: &TableStyle) -> Vec<Vec<String>> {
        self.iter_mut()
            .map(|(id, url)| {
                let display = strip_url(url, prefix, style);
                vec![id.to_string(), display]
            })
            .collect()
    }
}

// Rewrites `url` in place and returns how the debug table should show it.
fn strip_url(url: &mut String, prefix: &str, style: &TableStyle) -> String {
    let stripped = rewrite(url, prefix).to_string();
    let display = if stripped != *url {
        style.highlight_prefix(prefix, &stripped)
    } else {
        url.clone()
    };
    *url = stripped;
    display
}

/// Build both variants of `records` for `domain`, printing the debug table to stdout
/// when enabled.
pub fn transform<T: UrlRecords>(
    records: &T,
    domain: &str,
    style: &TableStyle,
) -> Result<VariantPair<T>> {
    transform_into(records, domain, style, &mut io::stdout().lock())
}

/// Like [`transform`], writing the debug table to `out` instead.
pub fn transform_into<T: UrlRecords, W: Write>(
    records: &T,
    domain: &str,
    style: &TableStyle,
    out: &mut W,
) -> Result<VariantPair<T>> {
    let prefix = site_prefix(domain);

    let mut path_records = records.clone();
    let rows = path_records.rewrite_urls(&prefix, style);

    if style.debug {
        let mut table: Vec<Vec<String>> = vec![T::header().iter().map(|h| h.to_string()).collect()];
        table.extend(rows);
        writeln!(out, "\n{}\n", format_table(&table)?)
            .map_err(|e| BuildError::io("<debug output>", e))?;
    }

    Ok(VariantPair {
        full: Payload {
            variant: Variant::Full,
            prefix,
            json: records.clone(),
        },
        path: Payload {
            variant: Variant::Path,
            prefix: String::new(),
            json: path_records,
        },
    })
}

/// Navigation menus (`ccnavigation-header`, `ccnavigation-footer`).
pub fn transform_header_footer(
    records: &[MenuEntry],
    domain: &str,
    style: &TableStyle,
) -> Result<VariantPair<Vec<MenuEntry>>> {
    transform(&records.to_vec(), domain, style)
}

/// Script and style asset maps (`cc-wpscripts`, `cc-wpstyles`).
pub fn transform_assets(
    assets: &AssetMap,
    domain: &str,
    style: &TableStyle,
) -> Result<VariantPair<AssetMap>> {
    transform(assets, domain, style)
}
