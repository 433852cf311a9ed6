mod config_gen;
mod domains;
mod links;
mod shorten;
mod stats;

pub use config_gen::config_generate;
pub use domains::list_domains;
pub use links::list_links;
pub use shorten::shorten_links;
pub use stats::show_stats;

use super::CliError;
use crate::errors::ShortdashError;
use crate::utils::parse_filter_date;
use chrono::{DateTime, Utc};

/// Parse an optional CLI date argument ("from" or "to" flavor)
pub(crate) fn parse_date_arg(
    arg: Option<String>,
    end_of_day: bool,
) -> Result<Option<DateTime<Utc>>, CliError> {
    arg.map(|s| parse_filter_date(&s, end_of_day))
        .transpose()
        .map_err(|e: ShortdashError| CliError::ParseError(e.format_simple()))
}
