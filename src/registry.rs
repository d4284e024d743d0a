//! Named helper registry for template engines.
//!
//! Template engines look helpers up by name and call them with dynamically
//! typed arguments. [`HelperRegistry`] holds every helper of this crate keyed
//! by its snake_case name, taking and returning [`serde_json::Value`]s.

use chrono::{DateTime, FixedOffset, Month};
use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::helpers;
use crate::tweet::{render_tweet_content_with, RenderOptions};

/// A helper callable through the registry.
pub type HelperFn = Box<dyn Fn(&Args<'_>) -> Result<Value, HelperError> + Send + Sync>;

/// Errors returned by [`HelperRegistry::call`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// No helper is registered under the name.
    UnknownHelper(String),
    /// The helper was called with the wrong number of arguments.
    WrongArgumentCount {
        helper: String,
        expected: usize,
        got: usize,
    },
    /// An argument has the wrong type or an out-of-range value.
    InvalidArgument {
        helper: String,
        index: usize,
        expected: &'static str,
    },
    /// The helper itself failed.
    Failed { helper: String, message: String },
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelperError::UnknownHelper(name) => write!(f, "unknown helper '{}'", name),
            HelperError::WrongArgumentCount {
                helper,
                expected,
                got,
            } => write!(
                f,
                "helper '{}' takes {} argument(s), got {}",
                helper, expected, got
            ),
            HelperError::InvalidArgument {
                helper,
                index,
                expected,
            } => write!(
                f,
                "argument {} of helper '{}' must be {}",
                index, helper, expected
            ),
            HelperError::Failed { helper, message } => {
                write!(f, "helper '{}' failed: {}", helper, message)
            }
        }
    }
}

impl std::error::Error for HelperError {}

/// Positional arguments of a helper call, with typed accessors.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    helper: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(helper: &'a str, values: &'a [Value]) -> Self {
        Self { helper, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fails unless exactly `expected` arguments were passed.
    pub fn expect_len(&self, expected: usize) -> Result<(), HelperError> {
        if self.values.len() == expected {
            Ok(())
        } else {
            Err(HelperError::WrongArgumentCount {
                helper: self.helper.to_string(),
                expected,
                got: self.values.len(),
            })
        }
    }

    pub fn value(&self, index: usize) -> Result<&'a Value, HelperError> {
        self.values
            .get(index)
            .ok_or_else(|| self.invalid(index, "present"))
    }

    pub fn str(&self, index: usize) -> Result<&'a str, HelperError> {
        self.value(index)?
            .as_str()
            .ok_or_else(|| self.invalid(index, "a string"))
    }

    /// A string holding exactly one character.
    pub fn char(&self, index: usize) -> Result<char, HelperError> {
        let s = self.str(index)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(self.invalid(index, "a single character")),
        }
    }

    pub fn f64(&self, index: usize) -> Result<f64, HelperError> {
        self.value(index)?
            .as_f64()
            .ok_or_else(|| self.invalid(index, "a number"))
    }

    pub fn i64(&self, index: usize) -> Result<i64, HelperError> {
        self.value(index)?
            .as_i64()
            .ok_or_else(|| self.invalid(index, "an integer"))
    }

    pub fn usize(&self, index: usize) -> Result<usize, HelperError> {
        self.value(index)?
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| self.invalid(index, "a non-negative integer"))
    }

    pub fn bool(&self, index: usize) -> Result<bool, HelperError> {
        self.value(index)?
            .as_bool()
            .ok_or_else(|| self.invalid(index, "a boolean"))
    }

    /// An RFC 3339 timestamp such as `2016-07-03T12:34:00Z`.
    pub fn time(&self, index: usize) -> Result<DateTime<FixedOffset>, HelperError> {
        DateTime::parse_from_rfc3339(self.str(index)?)
            .map_err(|_| self.invalid(index, "an RFC 3339 timestamp"))
    }

    /// A non-negative number of seconds.
    pub fn duration(&self, index: usize) -> Result<Duration, HelperError> {
        let seconds = self.f64(index)?;
        Duration::try_from_secs_f64(seconds)
            .map_err(|_| self.invalid(index, "a non-negative number of seconds"))
    }

    fn invalid(&self, index: usize, expected: &'static str) -> HelperError {
        HelperError::InvalidArgument {
            helper: self.helper.to_string(),
            index,
            expected,
        }
    }
}

/// Helpers keyed by name.
pub struct HelperRegistry {
    helpers: BTreeMap<String, HelperFn>,
}

impl fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperRegistry")
            .field("helpers", &self.helpers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HelperRegistry {
    /// Creates a registry holding every built-in helper, rendering tweets with
    /// the default options.
    pub fn new() -> Self {
        Self::with_render_options(Arc::new(RenderOptions::default()))
    }

    /// Creates a registry holding every built-in helper, rendering tweets with
    /// the given options.
    pub fn with_render_options(options: Arc<RenderOptions>) -> Self {
        let mut registry = Self::empty();
        registry.register_builtins(options);
        registry
    }

    /// Creates a registry with no helpers.
    pub fn empty() -> Self {
        Self {
            helpers: BTreeMap::new(),
        }
    }

    /// Registers a helper, replacing any helper with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, helper: F)
    where
        F: Fn(&Args<'_>) -> Result<Value, HelperError> + Send + Sync + 'static,
    {
        self.helpers.insert(name.into(), Box::new(helper));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Names of all registered helpers, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.helpers.keys().map(String::as_str).collect()
    }

    /// Calls the helper registered under `name`.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, HelperError> {
        let helper = self
            .helpers
            .get(name)
            .ok_or_else(|| HelperError::UnknownHelper(name.to_string()))?;

        debug!("Calling helper '{}' with {} argument(s)", name, args.len());
        helper(&Args::new(name, args))
    }

    fn register_builtins(&mut self, options: Arc<RenderOptions>) {
        self.register("render_tweet_content", move |args| {
            args.expect_len(1)?;
            Ok(Value::from(render_tweet_content_with(
                args.str(0)?,
                &options,
            )))
        });

        self.register("distance_of_time_in_words", |args| {
            args.expect_len(2)?;
            Ok(Value::from(helpers::distance_of_time_in_words(
                &args.time(0)?,
                &args.time(1)?,
            )))
        });
        self.register("format_time", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::format_time(&args.time(0)?)))
        });
        self.register("format_time_with_minute", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::format_time_with_minute(&args.time(0)?)))
        });
        self.register("format_time_year_month", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::format_time_year_month(&args.time(0)?)))
        });
        self.register("month_name", |args| {
            args.expect_len(1)?;
            let month = u8::try_from(args.usize(0)?)
                .ok()
                .and_then(|n| Month::try_from(n).ok())
                .ok_or_else(|| args.invalid(0, "a month number from 1 to 12"))?;
            Ok(Value::from(helpers::month_name(month)))
        });

        self.register("in_km", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::in_km(args.f64(0)?)))
        });
        self.register("number_with_delimiter", |args| {
            args.expect_len(2)?;
            Ok(Value::from(helpers::number_with_delimiter(
                args.char(0)?,
                args.i64(1)?,
            )))
        });
        self.register("round", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::round(args.f64(0)?)))
        });
        self.register("round_to_string", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::round_to_string(args.f64(0)?)))
        });
        self.register("pace", |args| {
            args.expect_len(2)?;
            Ok(Value::from(helpers::pace(args.f64(0)?, args.duration(1)?)))
        });
        self.register("rand_intn", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::rand_intn(args.i64(0)?)))
        });
        self.register("to_stars", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::to_stars(args.usize(0)?)))
        });

        self.register("to_2x", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::to_2x(args.str(0)?)))
        });
        self.register("retina_image", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::retina_image(args.str(0)?)))
        });
        self.register("retina_image_title", |args| {
            args.expect_len(2)?;
            Ok(Value::from(helpers::retina_image_title(
                args.str(0)?,
                args.str(1)?,
            )))
        });
        self.register("lazy_retina_image", |args| {
            args.expect_len(3)?;
            Ok(Value::from(helpers::lazy_retina_image(
                args.usize(0)?,
                args.str(1)?,
                args.str(2)?,
            )))
        });
        self.register("lazy_retina_image_lightbox", |args| {
            args.expect_len(4)?;
            Ok(Value::from(helpers::lazy_retina_image_lightbox(
                args.usize(0)?,
                args.str(1)?,
                args.str(2)?,
                args.bool(3)?,
            )))
        });

        self.register("marshal_json", |args| {
            args.expect_len(1)?;
            helpers::marshal_json(args.value(0)?)
                .map(Value::from)
                .map_err(|e| HelperError::Failed {
                    helper: "marshal_json".to_string(),
                    message: e.to_string(),
                })
        });
        self.register("query_escape", |args| {
            args.expect_len(1)?;
            Ok(Value::from(helpers::query_escape(args.str(0)?)))
        });
    }
}
