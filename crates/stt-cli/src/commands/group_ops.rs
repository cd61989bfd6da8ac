use std::path::Path;
use std::process;

use serde::Serialize;
use stt_engine::settings::settings;
use stt_engine::{common_expansion, Group, GroupKind};

use crate::history::load_grouper;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Serialize)]
struct ExpansionReport<'a> {
    partial: &'a str,
    expansions: &'a [String],
    common: Option<String>,
}

pub fn render_groups(groups: &[Group], json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(groups);
    }
    let breadcrumb: Vec<&str> = groups.iter().map(|g| g.content.as_str()).collect();
    let mut out = format!("{}\n", breadcrumb.join(" > "));
    for g in groups {
        let kind = match g.kind {
            GroupKind::Match => "match",
            GroupKind::Remainder => "remainder",
        };
        out.push_str(&format!(
            "  {kind:<9} {:>3}..{:<3} {}\n",
            g.range.start, g.range.end, g.content
        ));
    }
    Ok(out)
}

pub fn render_expansions(
    partial: &str,
    expansions: &[String],
    json: bool,
) -> Result<String, serde_json::Error> {
    let common = common_expansion(expansions);
    if json {
        return serde_json::to_string_pretty(&ExpansionReport {
            partial,
            expansions,
            common,
        });
    }
    if expansions.is_empty() {
        return Ok("(no expansions)\n".to_string());
    }
    let mut out = String::new();
    for e in expansions {
        out.push_str(&format!("{partial}[{e}]\n"));
    }
    if let Some(c) = common {
        out.push_str(&format!("common: {c:?}\n"));
    }
    Ok(out)
}

pub fn groups(history_file: &str, text: &str, json: bool) {
    let grouper = die!(
        load_grouper(Path::new(history_file), &settings().grouper.baseline),
        "Error: {}"
    );
    let out = die!(render_groups(&grouper.groups_of(text), json), "Error: {}");
    print!("{out}");
}

pub fn expand(history_file: &str, partial: &str, limit: Option<usize>, json: bool) {
    let grouper = die!(
        load_grouper(Path::new(history_file), &settings().grouper.baseline),
        "Error: {}"
    );
    let mut expansions = grouper.get_possible_expansions(partial);
    expansions.truncate(limit.unwrap_or(settings().expansion.max_results));
    let out = die!(render_expansions(partial, &expansions, json), "Error: {}");
    print!("{out}");
}
