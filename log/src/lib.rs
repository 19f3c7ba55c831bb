use std::{env, fmt};

use ansiterm::{Color, Style};
use log::{level_filters::LevelFilter, Event, Level, Subscriber};
use time::format_description::well_known::Iso8601;
use tracing_log::NormalizeEvent;
use tracing_subscriber::{
    filter::Targets,
    fmt::{
        format::Writer,
        time::{FormatTime, UtcTime},
        FmtContext, FormatEvent, FormatFields, FormattedFields,
    },
    registry::LookupSpan,
};

/// Tracing targets of every crate in the workspace.
pub static SEQLIST_MODULES: &[&str] = &[
    "seqlist_collections",
    "seqlist_log",
    "seqlist_test_log",
];

/// Environment variable holding the log directives.
pub const ENV: &str = "RUST_LOG";

/// Widest module name printed before it gets truncated.
const MAX_MODULE_WIDTH: usize = 20;

pub trait TargetsExt {
    /// Sets `level` for every crate listed in [`SEQLIST_MODULES`].
    fn with_seqlist_targets(self, level: LevelFilter) -> Self;
    /// Applies the comma-separated directives found in [`ENV`].
    ///
    /// A directive is either a bare level, which becomes the default, or
    /// `target=level`. The target `seqlist` stands for all workspace crates.
    /// Directives with an unknown level are skipped.
    fn with_env(self) -> Self;
}

impl TargetsExt for Targets {
    fn with_seqlist_targets(self, level: LevelFilter) -> Targets {
        SEQLIST_MODULES
            .iter()
            .fold(self, |targets, &module| targets.with_target(module, level))
    }

    fn with_env(self) -> Targets {
        match env::var(ENV) {
            Ok(directives) => apply_directives(self, &directives),
            Err(env::VarError::NotPresent) => self,
            Err(env::VarError::NotUnicode(_)) => panic!("env var {ENV} contains non-UTF-8 value"),
        }
    }
}

fn apply_directives(mut targets: Targets, directives: &str) -> Targets {
    for directive in directives.split(',').map(str::trim) {
        let (target, level) = match directive.split_once('=') {
            Some((target, level)) => (Some(target), level),
            None => (None, directive),
        };
        let level: LevelFilter = match level.parse() {
            Ok(level) => level,
            Err(_) => continue,
        };
        targets = match target {
            Some("seqlist") => targets.with_seqlist_targets(level),
            Some(target) => targets.with_target(target, level),
            None => targets.with_default(level),
        };
    }
    targets
}

/// Event formatter printing `<time> <LEVEL> <module> | <fields>, <spans>`.
pub struct Formatting<T: FormatTime>(pub T);

impl<S, N, T: FormatTime> FormatEvent<S, N> for Formatting<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let ansi = writer.has_ansi_escapes();
        let (bold, dim) = if ansi {
            (Style::default().bold(), Style::default().dimmed())
        } else {
            (Style::default(), Style::default())
        };
        write!(&mut writer, "{}", dim.prefix())?;
        self.0.format_time(&mut writer)?;
        write!(&mut writer, "{}", dim.suffix())?;

        // Events forwarded from the `log` crate carry their real metadata
        // in the fields.
        let normalized_metadata = event.normalized_metadata();
        let metadata = normalized_metadata
            .as_ref()
            .unwrap_or_else(|| event.metadata());

        let color = if ansi {
            Style::from(level_color(metadata.level()))
        } else {
            Style::default()
        };

        let (module, truncated) = module_name(metadata.target());
        let indicator = if truncated {
            "…"
        } else if module.len() < MAX_MODULE_WIDTH {
            " "
        } else {
            ""
        };

        write!(
            &mut writer,
            " {}{:5}{} {}{:width$}{}{} | ",
            color.prefix(),
            metadata.level(),
            color.suffix(),
            dim.prefix(),
            module,
            indicator,
            dim.suffix(),
            width = MAX_MODULE_WIDTH - 1,
        )?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, ", {}{}{{", bold.prefix(), span.name())?;

                let extensions = span.extensions();
                if let Some(fields) = extensions.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{}", fields)?;
                    }
                }
                write!(writer, "}}{}", bold.suffix())?;
            }
        }

        writeln!(writer)
    }
}

fn level_color(level: &Level) -> Color {
    match *level {
        Level::TRACE => Color::Purple,
        Level::DEBUG => Color::Blue,
        Level::INFO => Color::Green,
        Level::WARN => Color::Yellow,
        Level::ERROR => Color::Red,
    }
}

/// Drops the module path from `target` and cuts it to fit the module column.
/// Returns whether the name was cut.
fn module_name(target: &str) -> (&str, bool) {
    let module = match target.rfind("::") {
        Some(pos) => &target[pos + 2..],
        None => target,
    };
    if module.len() <= MAX_MODULE_WIDTH {
        return (module, false);
    }
    let end = (0..MAX_MODULE_WIDTH)
        .rev()
        .find(|&i| module.is_char_boundary(i))
        .unwrap_or(0);
    (&module[..end], true)
}

/// Prints an ISO 8601 UTC timestamp if enabled and nothing otherwise.
pub struct MaybeSystemTime(pub bool);

impl FormatTime for MaybeSystemTime {
    fn format_time(&self, w: &mut Writer) -> fmt::Result {
        if self.0 {
            UtcTime::new(Iso8601::DEFAULT).format_time(w)
        } else {
            ().format_time(w)
        }
    }
}
