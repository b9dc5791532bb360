//! Build creativecommons.org site includes (navigation header and footer, scripts, styles)
//! from the WordPress REST API.

pub mod endpoint;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod rewrite;
pub mod settings;
pub mod table;
pub mod transform;

pub use endpoint::Endpoint;
pub use error::{BuildError, Result};
pub use model::{AssetMap, MenuEntry, Payload, Variant, VariantPair};
pub use pipeline::{BuildReport, Builder, run};
pub use render::{Destination, IncludeRenderer};
pub use rewrite::rewrite;
pub use settings::{Settings, Target, UsageError, resolve_credentials};
pub use table::{TableError, TableStyle, format_table};
pub use transform::{transform_assets, transform_header_footer};
