use eyre::WrapErr;

use crate::cli::{OutputFormat, RootArgs};

pub const FORMAT_ENV: &str = "WAR_CALC_FORMAT";

#[derive(Debug, Clone)]
pub struct CalcConfig {
    pub format: OutputFormat,
}

impl CalcConfig {
    pub fn from_env_and_args(args: &RootArgs) -> eyre::Result<Self> {
        Self::resolve(args.format, std::env::var(FORMAT_ENV).ok())
    }

    /// A `--format` flag wins over the environment; neither means text.
    pub fn resolve(flag: Option<OutputFormat>, env_value: Option<String>) -> eyre::Result<Self> {
        let format = match (flag, env_value) {
            (Some(format), _) => format,
            (None, Some(v)) if !v.trim().is_empty() => v
                .trim()
                .parse::<OutputFormat>()
                .wrap_err_with(|| format!("{FORMAT_ENV} must be text or json, got {v:?}"))?,
            (None, _) => OutputFormat::default(),
        };

        Ok(Self { format })
    }
}
